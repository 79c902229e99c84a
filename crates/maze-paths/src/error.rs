use std::collections::TryReserveError;

use thiserror::Error;

/// Errors raised by route search.
///
/// A search that finds no route is *not* an error; it yields an empty
/// [`Route`](crate::Route).
#[derive(Debug, Error)]
pub enum PathError {
    /// Search state for the maze could not be allocated.
    #[error("cannot allocate search state for {cells} cells")]
    Allocation {
        cells: usize,
        #[source]
        source: TryReserveError,
    },

    /// An algorithm name that is not one of `dfs`, `bfs`, `dijkstra`, `lava`.
    #[error("unknown algorithm {0:?} (expected dfs, bfs, dijkstra or lava)")]
    UnknownAlgorithm(String),

    /// A selector value outside `0..=4`.
    #[error("invalid algorithm selector {0} (expected 0 to clear or 1-4)")]
    InvalidSelector(u8),
}
