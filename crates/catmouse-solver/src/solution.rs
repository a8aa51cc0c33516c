//! The structured result of a solve.

use std::fmt;

use catmouse_core::{Maze, Point};

/// How a solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Outcome {
    /// The mouse has a route to an exit.
    Escaped,
    /// Every route to an exit can be cut off by the cat. The path is the one
    /// the mouse would take ignoring the cat.
    Doomed,
    /// No exit is reachable at all.
    NoPath,
    /// The maze has no exit to aim for.
    NoExit,
}

/// Which search produced the returned path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// The cat-constrained search.
    Safe,
    /// The unconstrained search run after the constrained one failed.
    Fallback,
    /// The unconstrained search of static-obstacles mode.
    Direct,
}

/// Everything a caller needs to report a solve.
///
/// `path` runs from `mouse_start` to `goal` inclusive and is empty when no
/// goal was reached. A non-empty path does not imply `success`: a doomed
/// mouse still gets its best route.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub success: bool,
    pub message: String,
    pub goal: Option<Point>,
    pub mouse_start: Point,
    pub cat_start: Point,
    pub path: Vec<Point>,
    pub outcome: Outcome,
    pub strategy: Option<Strategy>,
}

impl Solution {
    pub(crate) fn routed(
        maze: &Maze,
        outcome: Outcome,
        strategy: Strategy,
        path: Vec<Point>,
    ) -> Self {
        let goal = path.last().copied();
        let moves = path.len().saturating_sub(1);
        let message = match (outcome, goal) {
            (Outcome::Escaped, _) if strategy == Strategy::Safe => {
                "Mouse can escape safely!".to_string()
            }
            (Outcome::Escaped, Some(goal)) => {
                format!("Escape route to {goal} in {moves} moves")
            }
            (Outcome::Doomed, Some(goal)) => {
                format!(
                    "No safe path, the cat cuts off every route; \
                     best try is {goal} in {moves} moves"
                )
            }
            (outcome, _) => outcome.to_string(),
        };
        Self {
            success: outcome == Outcome::Escaped,
            message,
            goal,
            mouse_start: maze.mouse(),
            cat_start: maze.cat(),
            path,
            outcome,
            strategy: Some(strategy),
        }
    }

    pub(crate) fn unrouted(maze: &Maze, outcome: Outcome) -> Self {
        Self {
            success: false,
            message: outcome.to_string(),
            goal: None,
            mouse_start: maze.mouse(),
            cat_start: maze.cat(),
            path: Vec::new(),
            outcome,
            strategy: None,
        }
    }

    /// Number of steps along the path.
    #[inline]
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Escaped => "Mouse can escape",
            Self::Doomed => "No safe path, the cat cuts off every route",
            Self::NoPath => "No path, the mouse cannot reach any exit",
            Self::NoExit => "No exit found",
        })
    }
}
