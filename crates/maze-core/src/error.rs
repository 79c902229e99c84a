use std::path::PathBuf;

use thiserror::Error;

use crate::geom::Point;

/// Convenient result alias for maze construction and loading.
pub type Result<T> = std::result::Result<T, MazeError>;

/// Reasons a maze is rejected before any search may run.
#[derive(Debug, Error)]
pub enum MazeError {
    /// The input had no `rows cols` header.
    #[error("maze header missing: first line must be `rows cols`")]
    MissingHeader,

    /// A token could not be read as an integer.
    #[error("token {index} ({token:?}) is not an integer")]
    InvalidToken { index: usize, token: String },

    /// Rows or columns fall outside `1..=limit`, or the grid is too large
    /// to address.
    #[error("maze dimensions {rows}x{cols} out of range (1..={max_rows} rows, 1..={max_cols} cols)")]
    DimensionsOutOfRange {
        rows: i64,
        cols: i64,
        max_rows: usize,
        max_cols: usize,
    },

    /// A cell code outside the `CellKind` enumeration.
    #[error("unknown cell code {0}")]
    UnknownCellCode(i32),

    /// A cell code outside the enumeration, with its position.
    #[error("unknown cell code {code} at {pos}")]
    UnknownCellAt { code: i32, pos: Point },

    /// Fewer or more cell tokens than `rows * cols`.
    #[error("expected {expected} cell values, found {found}")]
    CellCount { expected: usize, found: usize },

    /// Not exactly one start cell.
    #[error("maze needs exactly one start cell, found {0}")]
    StartCount(usize),

    /// Not exactly one end cell.
    #[error("maze needs exactly one end cell, found {0}")]
    EndCount(usize),

    /// Procedural generation parameters were unusable.
    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),

    /// The maze file could not be read.
    #[error("cannot read maze file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
