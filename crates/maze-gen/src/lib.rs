//! Procedural maze generation: random-walk carving plus terrain scatter.

pub mod mapgen;

pub use mapgen::{FourDirectionWalker, GenConfig, MazeGen, RandomWalker};
