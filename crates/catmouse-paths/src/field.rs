use catmouse_core::{Point, Range};

/// A position with an associated cost, as stored in a [`DistanceField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

/// Sentinel value meaning "unreachable" in distance fields.
pub const UNREACHABLE: i32 = i32::MAX;

const NO_PARENT: usize = usize::MAX;

/// Flat row-major slot numbers for the cells of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Indexer {
    rng: Range,
    width: usize,
}

impl Indexer {
    fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
        }
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        self.rng.contains(p).then(|| {
            let off = Point::new(p.x - self.rng.min.x, p.y - self.rng.min.y);
            off.y as usize * self.width + off.x as usize
        })
    }

    #[inline]
    fn point(&self, slot: usize) -> Point {
        Point::new(
            self.rng.min.x + (slot % self.width) as i32,
            self.rng.min.y + (slot / self.width) as i32,
        )
    }
}

/// Hop counts from a single source over a grid rectangle.
///
/// Values are write-once: the first distance recorded for a point is final.
/// Points never recorded are "not reached".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceField {
    ix: Indexer,
    dist: Vec<i32>,
    nodes: Vec<PathNode>,
}

impl DistanceField {
    /// An empty field covering `rng`.
    pub fn new(rng: Range) -> Self {
        Self {
            ix: Indexer::new(rng),
            dist: vec![UNREACHABLE; rng.len()],
            nodes: Vec::new(),
        }
    }

    /// The grid rectangle covered by the field.
    #[inline]
    pub fn range(&self) -> Range {
        self.ix.rng
    }

    /// Distance at `p`, or `None` if `p` was not reached.
    pub fn get(&self, p: Point) -> Option<i32> {
        match self.at(p) {
            UNREACHABLE => None,
            d => Some(d),
        }
    }

    /// Distance at `p`, or [`UNREACHABLE`] if `p` is outside the range or was
    /// not reached.
    pub fn at(&self, p: Point) -> i32 {
        match self.ix.idx(p) {
            Some(i) => self.dist[i],
            None => UNREACHABLE,
        }
    }

    /// Whether `p` has a recorded distance.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.get(p).is_some()
    }

    /// Record `cost` for `p`.
    ///
    /// Returns `false`, leaving the field untouched, if `p` is out of range
    /// or already has a distance.
    pub fn set(&mut self, p: Point, cost: i32) -> bool {
        let Some(i) = self.ix.idx(p) else {
            return false;
        };
        if self.dist[i] != UNREACHABLE {
            return false;
        }
        self.dist[i] = cost;
        self.nodes.push(PathNode { pos: p, cost });
        true
    }

    /// Number of reached points.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no point was reached.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Reached points in the order they were recorded.
    #[inline]
    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }
}

/// Back-pointers recorded by a search: for each discovered point, the point
/// it was discovered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorMap {
    ix: Indexer,
    parent: Vec<usize>,
    len: usize,
}

impl PredecessorMap {
    /// An empty map covering `rng`.
    pub fn new(rng: Range) -> Self {
        Self {
            ix: Indexer::new(rng),
            parent: vec![NO_PARENT; rng.len()],
            len: 0,
        }
    }

    /// The grid rectangle covered by the map.
    #[inline]
    pub fn range(&self) -> Range {
        self.ix.rng
    }

    /// Record `from` as the predecessor of `p`.
    ///
    /// Returns `false` if either point is out of range or `p` already has a
    /// predecessor.
    pub fn set(&mut self, p: Point, from: Point) -> bool {
        let (Some(i), Some(fi)) = (self.ix.idx(p), self.ix.idx(from)) else {
            return false;
        };
        if self.parent[i] != NO_PARENT {
            return false;
        }
        self.parent[i] = fi;
        self.len += 1;
        true
    }

    /// The predecessor of `p`, if one was recorded.
    pub fn get(&self, p: Point) -> Option<Point> {
        let i = self.ix.idx(p)?;
        match self.parent[i] {
            NO_PARENT => None,
            fi => Some(self.ix.point(fi)),
        }
    }

    /// Whether `p` has a predecessor.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.get(p).is_some()
    }

    /// Number of points with a predecessor.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_write_once() {
        let mut f = DistanceField::new(Range::new(0, 0, 3, 3));
        assert!(f.is_empty());
        assert!(f.set(Point::new(1, 1), 4));
        assert!(!f.set(Point::new(1, 1), 2));
        assert_eq!(f.get(Point::new(1, 1)), Some(4));
        assert_eq!(f.len(), 1);
        assert_eq!(f.nodes(), &[PathNode { pos: Point::new(1, 1), cost: 4 }]);
    }

    #[test]
    fn distance_out_of_range() {
        let mut f = DistanceField::new(Range::new(0, 0, 2, 2));
        assert!(!f.set(Point::new(2, 0), 0));
        assert_eq!(f.at(Point::new(-1, 0)), UNREACHABLE);
        assert_eq!(f.get(Point::new(0, 0)), None);
        assert!(!f.contains(Point::new(5, 5)));
    }

    #[test]
    fn offset_range_indexing() {
        let mut f = DistanceField::new(Range::new(5, 5, 8, 7));
        assert!(f.set(Point::new(7, 6), 3));
        assert_eq!(f.get(Point::new(7, 6)), Some(3));
        assert!(!f.set(Point::new(0, 0), 1));

        let mut m = PredecessorMap::new(Range::new(5, 5, 8, 7));
        assert!(m.set(Point::new(7, 6), Point::new(6, 6)));
        assert_eq!(m.get(Point::new(7, 6)), Some(Point::new(6, 6)));
    }

    #[test]
    fn predecessor_is_write_once() {
        let mut m = PredecessorMap::new(Range::new(0, 0, 3, 1));
        assert!(m.set(Point::new(1, 0), Point::new(0, 0)));
        assert!(!m.set(Point::new(1, 0), Point::new(2, 0)));
        assert_eq!(m.get(Point::new(1, 0)), Some(Point::new(0, 0)));
        assert_eq!(m.get(Point::new(0, 0)), None);
        assert!(!m.set(Point::new(2, 0), Point::new(3, 0)));
        assert_eq!(m.len(), 1);
    }
}
