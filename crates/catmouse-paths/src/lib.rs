//! Breadth-first searches for the cat-and-mouse maze solver.
//!
//! Every search here is unweighted and orthogonal, so a hop count equals the
//! true shortest-path length:
//!
//! - **Distance fields** from a single source ([`distance_field`])
//! - **Threat-constrained search** that only admits cells reached strictly
//!   before an opponent's field says it arrives ([`safe_search`])
//! - **Unconstrained search**, stopping at a goal or exploring everything
//!   ([`unconstrained_search`], [`exhaustive_search`])
//! - **Path reconstruction** from recorded predecessors ([`reconstruct`])
//!
//! Each call returns freshly allocated [`DistanceField`] and
//! [`PredecessorMap`] values; no search state survives between calls.
//!
//! # Movement
//!
//! | Type | Role |
//! |---|---|
//! | [`Pather`] | neighbor enumeration used by every search |
//! | [`MazePather`] | orthogonal moves over a [`catmouse_core::Maze`] with a "blocked" predicate |

mod bfs;
mod field;
mod path;
mod pather;
mod traits;

pub use bfs::{
    Search, TieRule, distance_field, exhaustive_search, safe_search, unconstrained_search,
};
pub use field::{DistanceField, PathNode, PredecessorMap, UNREACHABLE};
pub use path::{PathError, is_contiguous, reconstruct};
pub use pather::MazePather;
pub use traits::Pather;
