use std::collections::VecDeque;

use log::{debug, warn};
use maze_core::{Maze, Point};

use crate::state::PathState;
use crate::terrain::Terrain;
use crate::traits::Pather;

/// FIFO frontier that accepts at most `capacity` pushes over its lifetime.
struct Frontier {
    queue: VecDeque<Point>,
    pushed: usize,
    capacity: usize,
}

impl Frontier {
    fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            pushed: 0,
            capacity,
        }
    }

    /// Enqueue `p`, or return `false` once capacity is spent.
    fn push(&mut self, p: Point) -> bool {
        if self.pushed >= self.capacity {
            return false;
        }
        self.pushed += 1;
        self.queue.push_back(p);
        true
    }

    fn pop(&mut self) -> Option<Point> {
        self.queue.pop_front()
    }
}

/// Breadth-first search from the maze's start to its end.
///
/// The frontier may hold every cell of the maze. See [`bfs_with`].
pub fn bfs(maze: &Maze, state: &mut PathState) -> bool {
    bfs_with(
        &Terrain::new(maze),
        maze.start(),
        maze.end(),
        state,
        maze.len(),
    )
}

/// Breadth-first search from `from` to `to` over `pather`.
///
/// Cells are marked visited and given their parent when *pushed*, so no cell
/// enters the frontier twice. The route found has the fewest hops.
///
/// If more than `capacity` cells would be enqueued the search stops and
/// reports failure instead of growing without bound.
pub fn bfs_with<P: Pather>(
    pather: &P,
    from: Point,
    to: Point,
    state: &mut PathState,
    capacity: usize,
) -> bool {
    let mut frontier = Frontier::new(capacity);
    if !frontier.push(from) {
        warn!("BFS frontier capacity {capacity} too small to seed the search");
        return false;
    }
    state.mark_visited(from);

    let mut nbuf = Vec::with_capacity(4);

    while let Some(cur) = frontier.pop() {
        if cur == to {
            debug!("BFS reached {to} after {} pushes", frontier.pushed);
            return true;
        }

        nbuf.clear();
        pather.neighbors(cur, &mut nbuf);
        for &n in &nbuf {
            if state.visited(n) {
                continue;
            }
            state.mark_visited(n);
            state.set_parent(n, Some(cur));
            if !frontier.push(n) {
                warn!("BFS frontier overflow (capacity {capacity}); reporting no path");
                return false;
            }
        }
    }

    debug!("BFS exhausted {} cells without reaching {to}", frontier.pushed);
    false
}
