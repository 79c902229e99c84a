use std::collections::BinaryHeap;

use log::{info, warn};
use maze_core::{Maze, Point};

use crate::state::{NodeRef, PathState, UNREACHABLE};
use crate::terrain::Terrain;
use crate::traits::WeightedPather;

/// Uniform-cost search from the maze's start to its end under the standard
/// terrain costs (ground 1, grass 3, lava 1000).
///
/// See [`dijkstra_with`].
pub fn dijkstra(maze: &Maze, state: &mut PathState) -> bool {
    let found = dijkstra_with(&Terrain::new(maze), maze.start(), maze.end(), state);
    if found {
        info!("Dijkstra cheapest route cost: {}", state.distance(maze.end()));
    } else {
        warn!("Dijkstra found no reachable route");
    }
    found
}

/// Uniform-cost search from `from` to `to` over `pather`.
///
/// Cells are finalized (marked visited) in order of increasing distance;
/// relaxing a neighbor updates its distance and parent when the route
/// through the current cell is strictly cheaper. The search stops as soon
/// as `to` is finalized or the frontier runs dry.
///
/// Returns whether `to` ended with a finite distance.
pub fn dijkstra_with<P: WeightedPather>(
    pather: &P,
    from: Point,
    to: Point,
    state: &mut PathState,
) -> bool {
    state.set_distance(from, 0);
    let mut open = BinaryHeap::new();
    open.push(NodeRef {
        cost: 0,
        pos: from,
        layer: 0,
    });

    let mut nbuf = Vec::with_capacity(4);

    while let Some(NodeRef { cost, pos, .. }) = open.pop() {
        // Skip stale entries.
        if state.visited(pos) || cost > state.distance(pos) {
            continue;
        }
        state.mark_visited(pos);
        if pos == to {
            break;
        }

        nbuf.clear();
        pather.neighbors(pos, &mut nbuf);
        for &n in &nbuf {
            if state.visited(n) {
                continue;
            }
            let tentative = cost.saturating_add(pather.cost(pos, n));
            if tentative < state.distance(n) {
                state.set_distance(n, tentative);
                state.set_parent(n, Some(pos));
                open.push(NodeRef {
                    cost: tentative,
                    pos: n,
                    layer: 0,
                });
            }
        }
    }

    state.distance(to) != UNREACHABLE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backtrack::backtrack;

    fn solve(text: &str) -> (Maze, PathState, bool) {
        let m = Maze::parse(text).unwrap();
        let mut st = PathState::new(&m).unwrap();
        let found = dijkstra(&m, &mut st);
        (m, st, found)
    }

    #[test]
    fn corridor_costs_four() {
        let (m, st, found) = solve("3 3\n-1 0 1\n1 0 1\n1 0 -2");
        assert!(found);
        assert_eq!(st.distance(m.end()), 4);
        assert_eq!(backtrack(&m, &st, m.len()).len(), 5);
    }

    #[test]
    fn detours_around_grass() {
        // Through grass: 3 + 3 + 1 = 7. Around: 1 + 1 + 1 + 1 + 1 = 5.
        let (m, st, found) = solve("2 4\n-1 2 2 -2\n0 0 0 0");
        assert!(found);
        assert_eq!(st.distance(m.end()), 5);
        let path = backtrack(&m, &st, m.len());
        assert!(path.iter().all(|&p| m.at(p) != Some(maze_core::CellKind::Grass)));
    }

    #[test]
    fn lava_is_a_soft_wall() {
        // The only route crosses one lava cell: expensive but found.
        let (m, st, found) = solve("3 3\n-1 0 1\n1 3 1\n1 0 -2");
        assert!(found);
        assert_eq!(st.distance(m.end()), 1 + 1000 + 1 + 1);
        assert!(backtrack(&m, &st, m.len()).contains(&Point::new(1, 1)));
    }

    #[test]
    fn lava_avoided_when_any_detour_exists() {
        let (m, st, found) = solve("3 3\n-1 3 -2\n0 1 0\n0 0 0");
        assert!(found);
        assert_eq!(st.distance(m.end()), 6);
        assert!(!backtrack(&m, &st, m.len()).contains(&Point::new(1, 0)));
    }

    #[test]
    fn equal_costs_expand_the_later_cell_first() {
        // Both routes cost 2. (0, 1) comes after (1, 0) in row-major order,
        // so it is finalized first and claims the end.
        let (m, st, found) = solve("2 2\n-1 0\n0 -2");
        assert!(found);
        assert_eq!(st.parent(m.end()), Some(Point::new(0, 1)));
        assert_eq!(
            backtrack(&m, &st, m.len()),
            vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)]
        );
    }

    #[test]
    fn disconnected_leaves_end_unreachable() {
        let (m, st, found) = solve("1 3\n-1 1 -2");
        assert!(!found);
        assert_eq!(st.distance(m.end()), UNREACHABLE);
        assert_eq!(st.parent(m.end()), None);
    }

    #[test]
    fn stops_once_end_is_finalized() {
        // A large open area beyond the end is never expanded.
        let (m, st, found) = solve("1 6\n-1 -2 0 0 0 0");
        assert!(found);
        assert!(st.visited(m.end()));
        assert!(!st.visited(Point::new(3, 0)));
    }
}
