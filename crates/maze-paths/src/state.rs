use std::cmp::Ordering;

use maze_core::{Bounds, Maze, Point};

use crate::error::PathError;

/// Sentinel value meaning "unreachable" (infinite distance).
pub const UNREACHABLE: i32 = i32::MAX;

/// Per-search overlays sized to one maze.
///
/// A fresh `PathState` is allocated for every search run and dropped
/// afterwards; nothing carries over between runs. All three overlays are
/// flat row-major buffers with the maze's dimensions:
///
/// - `visited`: whether a cell has been expanded or finalized
/// - `parent`: predecessor on the route found to a cell (`None` at start)
/// - `distance`: tentative cumulative cost, [`UNREACHABLE`] until reached
pub struct PathState {
    bounds: Bounds,
    visited: Vec<bool>,
    parent: Vec<Option<Point>>,
    distance: Vec<i32>,
}

impl PathState {
    /// Allocate state for `maze`: nothing visited, no parents, every
    /// distance infinite except the start's, which is 0.
    ///
    /// Fails with [`PathError::Allocation`] if any overlay cannot be
    /// reserved; whatever was already allocated is released on return.
    pub fn new(maze: &Maze) -> Result<Self, PathError> {
        let len = maze.len();
        let mut state = Self {
            bounds: maze.bounds(),
            visited: filled(len, false)?,
            parent: filled(len, None)?,
            distance: filled(len, UNREACHABLE)?,
        };
        state.set_distance(maze.start(), 0);
        Ok(state)
    }

    /// Number of cells covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    /// Whether `p` has been expanded. Out-of-range points never are.
    #[inline]
    pub fn visited(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.visited[i])
    }

    /// Predecessor of `p` on the discovered route, if any.
    #[inline]
    pub fn parent(&self, p: Point) -> Option<Point> {
        self.idx(p).and_then(|i| self.parent[i])
    }

    /// Tentative distance of `p`, or [`UNREACHABLE`].
    #[inline]
    pub fn distance(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.distance[i],
            None => UNREACHABLE,
        }
    }

    /// Number of cells marked visited.
    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&&v| v).count()
    }

    #[inline]
    pub(crate) fn mark_visited(&mut self, p: Point) {
        if let Some(i) = self.idx(p) {
            self.visited[i] = true;
        }
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, p: Point, parent: Option<Point>) {
        if let Some(i) = self.idx(p) {
            self.parent[i] = parent;
        }
    }

    #[inline]
    pub(crate) fn set_distance(&mut self, p: Point, d: i32) {
        if let Some(i) = self.idx(p) {
            self.distance[i] = d;
        }
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        self.bounds.index(p)
    }
}

/// Allocate a `len`-element buffer of `value`, reporting failure instead of
/// aborting.
pub(crate) fn filled<T: Clone>(len: usize, value: T) -> Result<Vec<T>, PathError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|source| PathError::Allocation { cells: len, source })?;
    buf.resize(len, value);
    Ok(buf)
}

// ---------------------------------------------------------------------------
// Priority-queue entry for the Dijkstra family
// ---------------------------------------------------------------------------

/// Heap entry ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// cost first. Equal costs pop the row-major-*last* point first, the same
/// cell a forward scan keeping the last minimum would pick, then the lower
/// layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) cost: i32,
    pub(crate) pos: Point,
    pub(crate) layer: u8,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| self.pos.cmp(&other.pos))
            .then_with(|| other.layer.cmp(&self.layer))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
