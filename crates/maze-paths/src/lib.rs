//! Route search over typed-cell mazes.
//!
//! Four interchangeable strategies find a route from a [`Maze`]'s start to
//! its end on a 4-connected grid (no diagonals, walls block):
//!
//! - **Depth-first search** ([`dfs`]), first-found route, explicit stack
//! - **Breadth-first search** ([`bfs`]), fewest hops
//! - **Dijkstra** ([`dijkstra`]), cheapest route under terrain costs
//! - **Dijkstra with one lava crossing** ([`dijkstra_one_lava`])
//!
//! Every search writes into a freshly allocated [`PathState`]; on success
//! [`backtrack`] turns its parent links into an ordered start→end route.
//! [`Algorithm::solve`] runs the whole pipeline, and [`PathSession`] enforces
//! the one-active-result selection protocol.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | DFS, BFS |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra, [`path_cost`] |
//!
//! [`Maze`]: maze_core::Maze

mod algorithm;
mod backtrack;
mod bfs;
mod dfs;
mod dijkstra;
mod error;
mod lava;
mod session;
mod state;
mod terrain;
mod traits;

pub use algorithm::{Algorithm, Route, Selection};
pub use backtrack::{backtrack, path_cost};
pub use bfs::{bfs, bfs_with};
pub use dfs::{dfs, dfs_with};
pub use dijkstra::{dijkstra, dijkstra_with};
pub use error::PathError;
pub use lava::{TOLERATED_LAVA_COST, dijkstra_one_lava};
pub use session::PathSession;
pub use state::{PathState, UNREACHABLE};
pub use terrain::{Terrain, TolerantTerrain};
pub use traits::{Pather, WeightedPather};
