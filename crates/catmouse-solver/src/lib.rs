//! Escape routes for a mouse chased by a cat.
//!
//! Given a [`Maze`](catmouse_core::Maze) with one mouse, one cat and either
//! doors or an open border, the [`Solver`] looks for a route along which the
//! mouse reaches every cell strictly before the cat could. When no such route
//! exists it still reports the shortest route ignoring the cat, flagged as
//! [`Outcome::Doomed`].
//!
//! ```
//! use catmouse_core::Maze;
//! use catmouse_solver::{Outcome, solve};
//!
//! let maze = Maze::parse("M.D\n...\n..C").unwrap();
//! let s = solve(&maze).unwrap();
//! assert_eq!(s.outcome, Outcome::Escaped);
//! assert_eq!(s.moves(), 2);
//! ```
//!
//! Enable the `serde` feature to (de)serialize [`SolverConfig`], [`Solution`]
//! and the `MapData` documents front-ends exchange.

mod config;
mod error;
mod goals;
#[cfg(feature = "serde")]
mod mapdata;
mod solution;
mod solver;

pub use catmouse_paths::TieRule;
pub use config::{Mode, SolverConfig, Terrain};
pub use error::SolveError;
pub use goals::GoalSet;
#[cfg(feature = "serde")]
pub use mapdata::{GridSize, MapData, Row};
pub use solution::{Outcome, Solution, Strategy};
pub use solver::{Solver, solve};
