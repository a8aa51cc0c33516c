use std::fmt;

use catmouse_core::MazeError;
use catmouse_paths::PathError;

/// Errors that abort a solve.
///
/// Failing to find a (safe) route is not an error; see
/// [`Outcome`](crate::Outcome).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The map could not be turned into a maze (bad codes, missing agents).
    Maze(MazeError),
    /// A search reported a goal its predecessors cannot lead back from.
    Internal(PathError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Maze(e) => write!(f, "invalid map: {e}"),
            Self::Internal(e) => write!(f, "internal error: {e}"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Maze(e) => Some(e),
            Self::Internal(e) => Some(e),
        }
    }
}

impl From<MazeError> for SolveError {
    fn from(e: MazeError) -> Self {
        Self::Maze(e)
    }
}

impl From<PathError> for SolveError {
    fn from(e: PathError) -> Self {
        Self::Internal(e)
    }
}
