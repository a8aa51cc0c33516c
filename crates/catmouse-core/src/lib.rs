//! Core types for the cat-and-mouse maze solver.
//!
//! This crate provides the foundational types used across the *catmouse*
//! workspace: geometry primitives and the immutable [`Maze`] grid model with
//! its cell classification.

pub mod cell;
pub mod geom;
pub mod maze;

pub use cell::CellKind;
pub use geom::{Point, Range};
pub use maze::{Maze, MazeError};
