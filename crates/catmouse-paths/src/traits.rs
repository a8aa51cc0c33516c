use catmouse_core::Point;

/// Neighbor enumeration shared by every search in this crate.
///
/// Each reported neighbor counts as one step away.
pub trait Pather {
    /// Append the passable neighbors of `p` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

impl<P: Pather + ?Sized> Pather for &P {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        (**self).neighbors(p, buf)
    }
}
