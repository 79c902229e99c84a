//! The [`Maze`] type: a validated, read-only grid of [`CellKind`]s.
//!
//! Cells live in one flat row-major buffer indexed by `y * cols + x`.
//! A `Maze` is immutable once built; search code borrows it read-only.

use log::{debug, info};

use crate::cell::CellKind;
use crate::error::{MazeError, Result};
use crate::geom::{Bounds, Point};

/// Application bound on maze dimensions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeLimits {
    pub max_rows: usize,
    pub max_cols: usize,
}

impl Default for MazeLimits {
    fn default() -> Self {
        Self {
            max_rows: 20,
            max_cols: 20,
        }
    }
}

impl MazeLimits {
    /// Limits allowing any `rows x cols` up to the given bounds.
    pub const fn new(max_rows: usize, max_cols: usize) -> Self {
        Self { max_rows, max_cols }
    }

    /// Validate `rows x cols` against these limits.
    pub fn bounds(&self, rows: usize, cols: usize) -> Result<Bounds> {
        self.bounds_for(wide(rows), wide(cols))
    }

    /// The bounds of a `rows x cols` maze within these limits. Dimensions
    /// must also be addressable: each side fits an `i32` coordinate and the
    /// cell count fits a `usize`.
    pub(crate) fn bounds_for(&self, rows: i64, cols: i64) -> Result<Bounds> {
        let fits = |n: i64, max: usize| n >= 1 && u64::try_from(n).is_ok_and(|n| n <= max as u64);
        let bounds = if fits(rows, self.max_rows) && fits(cols, self.max_cols) {
            usize::try_from(rows)
                .ok()
                .zip(usize::try_from(cols).ok())
                .and_then(|(r, c)| Bounds::new(r, c))
        } else {
            None
        };
        bounds.ok_or(MazeError::DimensionsOutOfRange {
            rows,
            cols,
            max_rows: self.max_rows,
            max_cols: self.max_cols,
        })
    }
}

fn wide(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// A rectangular maze with exactly one start and one end cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Maze {
    cells: Vec<CellKind>,
    bounds: Bounds,
    start: Point,
    end: Point,
}

impl Maze {
    /// Build a maze from row-major cells.
    ///
    /// Rejects dimensions outside `limits`, a buffer whose length is not
    /// `rows * cols`, and any grid without exactly one start and one end.
    pub fn from_cells(
        rows: usize,
        cols: usize,
        cells: Vec<CellKind>,
        limits: &MazeLimits,
    ) -> Result<Self> {
        let bounds = limits.bounds(rows, cols)?;
        let expected = bounds.len();
        if cells.len() != expected {
            return Err(MazeError::CellCount {
                expected,
                found: cells.len(),
            });
        }

        let mut starts = Vec::new();
        let mut ends = Vec::new();
        for (p, &kind) in bounds.iter().zip(cells.iter()) {
            match kind {
                CellKind::Start => starts.push(p),
                CellKind::End => ends.push(p),
                _ => {}
            }
        }
        let start = match starts.as_slice() {
            [p] => *p,
            _ => return Err(MazeError::StartCount(starts.len())),
        };
        let end = match ends.as_slice() {
            [p] => *p,
            _ => return Err(MazeError::EndCount(ends.len())),
        };

        info!("maze loaded: {rows} rows x {cols} cols");
        debug!("start {start}, end {end}");
        Ok(Self {
            cells,
            bounds,
            start,
            end,
        })
    }

    /// Number of rows (height).
    #[inline]
    pub fn rows(&self) -> usize {
        self.bounds.rows()
    }

    /// Number of columns (width).
    #[inline]
    pub fn cols(&self) -> usize {
        self.bounds.cols()
    }

    /// Total number of cells, `rows * cols`.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a valid maze has at least a start and an end.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The `[0, cols) x [0, rows)` rectangle.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The end cell.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Whether `p` lies within `[0, cols) x [0, rows)`.
    #[inline]
    pub fn is_valid(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat buffer index of `p`, or `None` if out of range.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        self.bounds.index(p)
    }

    /// The cell at `p`, or `None` if out of range.
    #[inline]
    pub fn at(&self, p: Point) -> Option<CellKind> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is in range and not a wall.
    #[inline]
    pub fn is_traversable(&self, p: Point) -> bool {
        self.at(p).is_some_and(CellKind::is_traversable)
    }

    /// Count cells of the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Row-major iterator over `(Point, CellKind)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellKind)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Row-major cell buffer.
    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }
}
