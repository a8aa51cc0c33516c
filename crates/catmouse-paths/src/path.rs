//! Turning a [`PredecessorMap`] back into a forward route.

use std::fmt;

use catmouse_core::Point;

use crate::field::PredecessorMap;

/// Walk the predecessor links from `goal` back to `start` and return the
/// route in forward order, both endpoints included.
///
/// A route can never be longer than the number of cells in the map's range;
/// exceeding that means the links loop.
pub fn reconstruct(
    predecessors: &PredecessorMap,
    start: Point,
    goal: Point,
) -> Result<Vec<Point>, PathError> {
    let limit = predecessors.range().len();
    let mut path = vec![goal];
    let mut cur = goal;
    while cur != start {
        let prev = predecessors
            .get(cur)
            .ok_or(PathError::Unreached { goal, at: cur })?;
        path.push(prev);
        if path.len() > limit {
            return Err(PathError::Cycle { goal, limit });
        }
        cur = prev;
    }
    path.reverse();
    Ok(path)
}

/// Whether every step of `path` moves exactly one orthogonal cell.
pub fn is_contiguous(path: &[Point]) -> bool {
    path.windows(2).all(|w| w[0].is_adjacent(w[1]))
}

/// Internal-consistency failures of [`reconstruct`].
///
/// These only happen when the map did not come from a search that reported
/// reaching `goal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The chain from `goal` stops at `at`, which has no predecessor and is
    /// not the start.
    Unreached { goal: Point, at: Point },
    /// Following predecessors from `goal` did not reach the start within
    /// `limit` steps.
    Cycle { goal: Point, limit: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreached { goal, at } if goal == at => {
                write!(f, "path: goal {goal} was never reached")
            }
            Self::Unreached { goal, at } => {
                write!(f, "path: chain from {goal} breaks at {at}")
            }
            Self::Cycle { goal, limit } => {
                write!(f, "path: no start within {limit} steps back from {goal}")
            }
        }
    }
}

impl std::error::Error for PathError {}
