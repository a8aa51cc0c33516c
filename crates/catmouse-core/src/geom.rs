//! Geometry primitives: [`Point`] and [`Range`].
//!
//! A maze is addressed with `x` as the column and `y` as the row, both
//! growing from the top-left corner.

use std::cmp::Ordering;
use std::fmt;

/// A cell position: `x` is the column, `y` the row.
///
/// Points order row-major (row first, then column), which is the order every
/// tie between equally good cells is broken in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Orthogonal neighbours in the fixed order up, right, down, left.
    ///
    /// Searches expand in this order, so path shapes are reproducible.
    #[inline]
    pub const fn neighbors_4(self) -> [Point; 4] {
        let Self { x, y } = self;
        [
            Self::new(x, y - 1),
            Self::new(x + 1, y),
            Self::new(x, y + 1),
            Self::new(x - 1, y),
        ]
    }

    /// Manhattan distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Whether `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        self.manhattan(other) == 1
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A rectangle of cells, `min` inclusive and `max` exclusive on both axes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// The rectangle spanned by two corners, in either order.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width() as usize * self.height() as usize
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Whether `p` is in the outermost ring of cells.
    #[inline]
    pub fn on_edge(self, p: Point) -> bool {
        self.contains(p)
            && (p.x == self.min.x
                || p.x == self.max.x - 1
                || p.y == self.min.y
                || p.y == self.max.y - 1)
    }

    /// Every cell, row-major.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: 0,
            len: self.len(),
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Row-major iterator over a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: usize,
    len: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.len {
            return None;
        }
        let w = self.range.width() as usize;
        let p = Point::new(
            self.range.min.x + (self.next % w) as i32,
            self.range.min.y + (self.next / w) as i32,
        );
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.len - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn row_major_order() {
        let mut pts = vec![Point::new(2, 0), Point::new(0, 1), Point::new(1, 0)];
        pts.sort();
        assert_eq!(pts, [Point::new(1, 0), Point::new(2, 0), Point::new(0, 1)]);
        assert!(Point::new(9, 0) < Point::new(0, 1));
    }

    #[test]
    fn neighbours() {
        let p = Point::new(5, 5);
        let ns: BTreeSet<_> = p.neighbors_4().into_iter().collect();
        assert_eq!(ns.len(), 4);
        assert!(ns.iter().all(|&n| n.is_adjacent(p)));
        assert_eq!(p.neighbors_4()[0], Point::new(5, 4));
        assert!(!p.is_adjacent(Point::new(6, 6)));
        assert!(!p.is_adjacent(p));
        assert_eq!(p.manhattan(Point::new(2, 9)), 7);
    }

    #[test]
    fn range_cells() {
        let r = Range::new(3, 2, 0, 0);
        assert_eq!(r.min, Point::new(0, 0));
        assert_eq!((r.width(), r.height(), r.len()), (3, 2, 6));
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, -1)));

        let pts: Vec<_> = r.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[1], Point::new(1, 0));
        assert_eq!(pts[5], Point::new(2, 1));
        assert_eq!(r.iter().len(), 6);
    }

    #[test]
    fn offset_and_empty_ranges() {
        let r = Range::new(5, 5, 7, 6);
        assert_eq!(r.iter().collect::<Vec<_>>(), [Point::new(5, 5), Point::new(6, 5)]);

        let e = Range::new(2, 0, 2, 4);
        assert!(e.is_empty());
        assert_eq!(e.len(), 0);
        assert_eq!(e.iter().next(), None);
    }

    #[test]
    fn edge_ring() {
        let r = Range::new(0, 0, 4, 3);
        // Only (1, 1) and (2, 1) are interior.
        assert_eq!(r.iter().filter(|&p| r.on_edge(p)).count(), 10);
        assert!(!r.on_edge(Point::new(1, 1)));
        assert!(r.on_edge(Point::new(3, 2)));
        assert!(!r.on_edge(Point::new(4, 2)));

        let row = Range::new(0, 0, 5, 1);
        assert!(row.iter().all(|p| row.on_edge(p)));
    }
}
