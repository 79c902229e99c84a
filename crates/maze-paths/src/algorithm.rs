//! Algorithm selection and the route handed to callers.

use std::fmt;
use std::str::FromStr;

use log::debug;
use maze_core::{Maze, Point};

use crate::backtrack::{backtrack, path_cost};
use crate::bfs::bfs;
use crate::dfs::dfs;
use crate::dijkstra::dijkstra;
use crate::error::PathError;
use crate::lava::dijkstra_one_lava;
use crate::state::PathState;
use crate::terrain::{Terrain, TolerantTerrain};

/// One of the four interchangeable search strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Dfs,
    Bfs,
    Dijkstra,
    DijkstraOneLava,
}

impl Algorithm {
    /// All strategies, in selector order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dfs,
        Algorithm::Bfs,
        Algorithm::Dijkstra,
        Algorithm::DijkstraOneLava,
    ];

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dfs => "DFS",
            Self::Bfs => "BFS",
            Self::Dijkstra => "Dijkstra",
            Self::DijkstraOneLava => "Dijkstra (one lava)",
        }
    }

    /// Selector value, `1..=4`.
    pub fn selector(self) -> u8 {
        match self {
            Self::Dfs => 1,
            Self::Bfs => 2,
            Self::Dijkstra => 3,
            Self::DijkstraOneLava => 4,
        }
    }

    /// Run this strategy over a fresh `state` and report whether the end was
    /// reached.
    pub fn search(self, maze: &Maze, state: &mut PathState) -> Result<bool, PathError> {
        Ok(match self {
            Self::Dfs => dfs(maze, state),
            Self::Bfs => bfs(maze, state),
            Self::Dijkstra => dijkstra(maze, state),
            Self::DijkstraOneLava => dijkstra_one_lava(maze, state)?,
        })
    }

    /// Allocate a fresh state, search, and reconstruct the route.
    ///
    /// "No route" is an `Ok` value with an empty [`Route`]; only allocation
    /// failure is an error.
    pub fn solve(self, maze: &Maze) -> Result<Route, PathError> {
        let mut state = PathState::new(maze)?;
        self.route(maze, &mut state)
    }

    /// Search into `state` and build the route from it.
    pub(crate) fn route(self, maze: &Maze, state: &mut PathState) -> Result<Route, PathError> {
        if !self.search(maze, state)? {
            return Ok(Route::none(self));
        }
        let path = backtrack(maze, state, maze.len());
        if path.is_empty() {
            return Ok(Route::none(self));
        }
        let cost = match self {
            Self::DijkstraOneLava => path_cost(&TolerantTerrain::new(maze), &path),
            _ => path_cost(&Terrain::new(maze), &path),
        };
        debug!("{}: {} cells, cost {cost}", self.label(), path.len());
        Ok(Route {
            algorithm: self,
            path,
            cost: Some(cost),
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "1" => Ok(Self::Dfs),
            "bfs" | "2" => Ok(Self::Bfs),
            "dijkstra" | "3" => Ok(Self::Dijkstra),
            "lava" | "dijkstra-lava" | "4" => Ok(Self::DijkstraOneLava),
            _ => Err(PathError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// An algorithm-selection event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    Run(Algorithm),
    Clear,
}

impl Selection {
    /// Decode a selector: `0` clears, `1..=4` pick an algorithm.
    pub fn from_selector(sel: u8) -> Result<Self, PathError> {
        match sel {
            0 => Ok(Self::Clear),
            _ => Algorithm::ALL
                .into_iter()
                .find(|a| a.selector() == sel)
                .map(Self::Run)
                .ok_or(PathError::InvalidSelector(sel)),
        }
    }
}

/// The outcome of one search: an ordered start→end route (empty when none
/// was found) and its cost under the algorithm's cost model.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub algorithm: Algorithm,
    pub path: Vec<Point>,
    pub cost: Option<i32>,
}

impl Route {
    fn none(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            path: Vec::new(),
            cost: None,
        }
    }

    /// Whether a route was found.
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of cells on the route, both ends included.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of steps, or `None` when no route was found.
    pub fn hops(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}
