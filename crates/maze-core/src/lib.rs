//! **maze-core**: typed-cell maze grids (core types).
//!
//! This crate provides the foundational types shared by the maze crates:
//! geometry primitives, the [`CellKind`] terrain enumeration, the validated
//! [`Maze`] grid and its whitespace-separated text format.
//!
//! A [`Maze`] can only be obtained through a validating constructor, so any
//! value of that type has exactly one start and one end cell and dimensions
//! within its [`MazeLimits`].

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod parse;

pub use cell::CellKind;
pub use error::{MazeError, Result};
pub use geom::{Bounds, Point};
pub use grid::{Maze, MazeLimits};
