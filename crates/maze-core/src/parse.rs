//! Whitespace-separated maze text format.
//!
//! ```text
//! 3 3
//! -1 0 1
//!  1 0 1
//!  1 0 -2
//! ```
//!
//! The first two integers are `rows cols`, followed by `rows * cols` cell
//! codes in row-major order (see [`CellKind`]). Line breaks carry no meaning
//! beyond separating tokens.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::error;

use crate::cell::CellKind;
use crate::error::{MazeError, Result};
use crate::geom::Point;
use crate::grid::{Maze, MazeLimits};

impl Maze {
    /// Parse the text format under the default 20x20 limits.
    pub fn parse(s: &str) -> Result<Self> {
        Self::parse_with_limits(s, &MazeLimits::default())
    }

    /// Parse the text format, rejecting dimensions outside `limits`.
    pub fn parse_with_limits(s: &str, limits: &MazeLimits) -> Result<Self> {
        let res = parse_tokens(s, limits);
        if let Err(e) = &res {
            error!("maze rejected: {e}");
        }
        res
    }

    /// Read and parse a maze file under the given limits.
    pub fn load(path: impl AsRef<Path>, limits: &MazeLimits) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| {
            error!("cannot open maze file {}", path.display());
            MazeError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::parse_with_limits(&text, limits)
    }
}

fn parse_tokens(s: &str, limits: &MazeLimits) -> Result<Maze> {
    let mut tokens = s.split_whitespace().enumerate().map(|(index, token)| {
        token.parse::<i64>().map_err(|_| MazeError::InvalidToken {
            index,
            token: token.to_string(),
        })
    });

    let (rows, cols) = match (tokens.next(), tokens.next()) {
        (Some(r), Some(c)) => (r?, c?),
        _ => return Err(MazeError::MissingHeader),
    };
    let bounds = limits.bounds_for(rows, cols)?;
    let (rows, cols) = (bounds.rows(), bounds.cols());

    // Grown token by token: the header alone must not size an allocation.
    let expected = bounds.len();
    let mut cells = Vec::new();
    for token in tokens.by_ref().take(expected) {
        let code = token?;
        let pos = Point::new((cells.len() % cols) as i32, (cells.len() / cols) as i32);
        let kind = i32::try_from(code)
            .ok()
            .and_then(|c| CellKind::try_from(c).ok())
            .ok_or(MazeError::UnknownCellAt {
                code: code.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
                pos,
            })?;
        cells.push(kind);
    }

    let extra = tokens.count();
    if cells.len() != expected || extra != 0 {
        return Err(MazeError::CellCount {
            expected,
            found: cells.len() + extra,
        });
    }

    Maze::from_cells(rows, cols, cells, limits)
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Maze {
    /// Writes the text format accepted by [`Maze::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.rows(), self.cols())?;
        for row in self.cells().chunks(self.cols()) {
            let line: Vec<String> = row.iter().map(|c| c.code().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
