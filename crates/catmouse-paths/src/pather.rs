//! [`MazePather`]: orthogonal movement over a [`Maze`] with a pluggable
//! "blocked" predicate.

use catmouse_core::{Maze, Point};

use crate::traits::Pather;

/// Moves one orthogonal step at a time inside the maze, refusing cells for
/// which `blocked` returns `true`.
///
/// The cat and the mouse use the same maze with different predicates.
pub struct MazePather<'a, F> {
    maze: &'a Maze,
    blocked: F,
}

impl<'a, F: Fn(Point) -> bool> MazePather<'a, F> {
    /// Create a pather over `maze` that never enters a cell where `blocked`
    /// holds.
    pub fn new(maze: &'a Maze, blocked: F) -> Self {
        Self { maze, blocked }
    }

    /// The maze being walked.
    #[inline]
    pub fn maze(&self) -> &'a Maze {
        self.maze
    }

    /// Whether `p` is inside the maze and not blocked.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        self.maze.contains(p) && !(self.blocked)(p)
    }
}

impl<F: Fn(Point) -> bool> Pather for MazePather<'_, F> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(self.maze.neighbors(p).filter(|&n| !(self.blocked)(n)));
    }
}
