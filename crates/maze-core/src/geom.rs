//! Grid coordinates: [`Point`] and the maze rectangle [`Bounds`].
//!
//! `x` is the column and `y` the row; `y` grows downwards, so "up" is
//! `y - 1`.

use std::cmp::Ordering;
use std::fmt;

/// Unit steps `(dx, dy)` in search order: up, down, left, right.
pub const SEARCH_ORDER: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// A cell coordinate.
///
/// Points order row-major (by `y`, then `x`), the same order in which a
/// maze stores its cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four cardinal neighbours in [`SEARCH_ORDER`]. Some may lie
    /// outside any given maze.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        SEARCH_ORDER.map(|(dx, dy)| Point::new(self.x + dx, self.y + dy))
    }

    /// Whether `other` is one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        self.manhattan(other) == 1
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The `[0, cols) x [0, rows)` rectangle of a maze, with the row-major
/// mapping between points and flat buffer indices.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    rows: i32,
    cols: i32,
}

impl Bounds {
    /// Bounds for a non-empty `rows x cols` grid, or `None` if either side
    /// is zero, does not fit an `i32` coordinate, or the cell count does not
    /// fit a `usize`.
    pub fn new(rows: usize, cols: usize) -> Option<Self> {
        if rows == 0 || cols == 0 {
            return None;
        }
        rows.checked_mul(cols)?;
        Some(Self {
            rows: i32::try_from(rows).ok()?,
            cols: i32::try_from(cols).ok()?,
        })
    }

    #[inline]
    pub fn rows(self) -> usize {
        self.rows as usize
    }

    #[inline]
    pub fn cols(self) -> usize {
        self.cols as usize
    }

    /// Number of cells.
    #[inline]
    pub fn len(self) -> usize {
        self.rows() * self.cols()
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (0..self.cols).contains(&p.x) && (0..self.rows).contains(&p.y)
    }

    /// Row-major index of `p`, or `None` outside the bounds.
    #[inline]
    pub fn index(self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| p.y as usize * self.cols() + p.x as usize)
    }

    /// Every point, row by row.
    pub fn iter(self) -> impl Iterator<Item = Point> {
        (0..self.rows).flat_map(move |y| (0..self.cols).map(move |x| Point::new(x, y)))
    }
}
