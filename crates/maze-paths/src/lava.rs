//! Dijkstra that may cross at most one lava cell.
//!
//! The search runs over two cost layers of the same grid, indexed by the
//! number of lava cells entered so far (0 or 1). Stepping onto lava moves a
//! route from layer 0 to layer 1; stepping onto lava from layer 1 is not
//! allowed. Within a layer, ordinary Dijkstra relaxation applies.
//!
//! The one tolerated crossing costs [`TOLERATED_LAVA_COST`] rather than the
//! soft-wall penalty, so the search finds routes through a single lava cell
//! that plain Dijkstra would only take as a last resort.

use std::collections::BinaryHeap;

use log::{info, warn};
use maze_core::cell::GROUND_COST;
use maze_core::{CellKind, Maze, Point};

use crate::error::PathError;
use crate::state::{NodeRef, PathState, UNREACHABLE, filled};
use crate::terrain::TolerantTerrain;
use crate::traits::{Pather, WeightedPather};

/// Cost of the single lava crossing allowed by [`dijkstra_one_lava`].
pub const TOLERATED_LAVA_COST: i32 = GROUND_COST;

const LAYERS: u8 = 2;

/// Cheapest route from start to end crossing at most one lava cell.
///
/// On success the winning route is written into `state`'s flat `parent`
/// and `distance` overlays, so [`backtrack`](crate::backtrack) applies as
/// for the other searches. Cells off that route carry their lava-free
/// (layer 0) labels; cells reachable only after crossing lava are labelled
/// only where they lie on the route.
///
/// Fails only if the layered buffers cannot be allocated.
pub fn dijkstra_one_lava(maze: &Maze, state: &mut PathState) -> Result<bool, PathError> {
    let terrain = TolerantTerrain::new(maze);
    let len = maze.len();
    let total = len * LAYERS as usize;
    let mut dist = filled(total, UNREACHABLE)?;
    let mut parent: Vec<Option<(Point, u8)>> = filled(total, None)?;
    let mut done = filled(total, false)?;

    let slot = |p: Point, layer: u8| maze.index(p).map(|i| layer as usize * len + i);

    let (start, end) = (maze.start(), maze.end());
    let Some(si) = slot(start, 0) else {
        return Ok(false);
    };
    dist[si] = 0;

    let mut open = BinaryHeap::new();
    open.push(NodeRef {
        cost: 0,
        pos: start,
        layer: 0,
    });
    let mut nbuf = Vec::with_capacity(4);
    let mut reached = None;

    while let Some(NodeRef { cost, pos, layer }) = open.pop() {
        let Some(ci) = slot(pos, layer) else {
            continue;
        };
        if done[ci] || cost > dist[ci] {
            continue;
        }
        done[ci] = true;
        state.mark_visited(pos);
        if pos == end {
            reached = Some(layer);
            break;
        }

        nbuf.clear();
        terrain.neighbors(pos, &mut nbuf);
        for &n in &nbuf {
            let next_layer = layer + u8::from(maze.at(n) == Some(CellKind::Lava));
            if next_layer >= LAYERS {
                continue;
            }
            let Some(ni) = slot(n, next_layer) else {
                continue;
            };
            if done[ni] {
                continue;
            }
            let tentative = cost.saturating_add(terrain.cost(pos, n));
            if tentative < dist[ni] {
                dist[ni] = tentative;
                parent[ni] = Some((pos, layer));
                open.push(NodeRef {
                    cost: tentative,
                    pos: n,
                    layer: next_layer,
                });
            }
        }
    }

    // Lava-free labels first; layer-0 parents always lie in layer 0.
    for p in maze.bounds().iter() {
        if let Some(i) = slot(p, 0) {
            if dist[i] != UNREACHABLE {
                state.set_distance(p, dist[i]);
                state.set_parent(p, parent[i].map(|(q, _)| q));
            }
        }
    }

    let Some(end_layer) = reached else {
        warn!("one-lava Dijkstra found no reachable route");
        return Ok(false);
    };

    // Overwrite the winning chain. It never revisits a cell: a loop back to
    // a cell in a higher layer can be cut without raising cost or crossings.
    let mut cur = (end, end_layer);
    for _ in 0..total {
        let Some(i) = slot(cur.0, cur.1) else {
            break;
        };
        state.set_distance(cur.0, dist[i]);
        state.set_parent(cur.0, parent[i].map(|(q, _)| q));
        match parent[i] {
            Some(prev) => cur = prev,
            None => break,
        }
    }

    info!(
        "one-lava Dijkstra cheapest route cost: {} ({} lava crossing{})",
        state.distance(end),
        end_layer,
        if end_layer == 1 { "" } else { "s" }
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backtrack::{backtrack, path_cost};
    use crate::dijkstra::dijkstra;

    fn lava_on(m: &Maze, path: &[Point]) -> usize {
        path.iter()
            .filter(|&&p| m.at(p) == Some(CellKind::Lava))
            .count()
    }

    fn solve(text: &str) -> (Maze, PathState, bool) {
        let m = Maze::parse(text).unwrap();
        let mut st = PathState::new(&m).unwrap();
        let found = dijkstra_one_lava(&m, &mut st).unwrap();
        (m, st, found)
    }

    #[test]
    fn crosses_a_blocking_lava_cell_cheaply() {
        let (m, st, found) = solve("3 3\n-1 0 1\n1 3 1\n1 0 -2");
        assert!(found);
        assert_eq!(st.distance(m.end()), 4);
        let path = backtrack(&m, &st, m.len());
        assert_eq!(path.len(), 5);
        assert_eq!(lava_on(&m, &path), 1);
    }

    #[test]
    fn takes_lava_shortcut_over_detour() {
        let text = "3 3\n-1 3 -2\n0 1 0\n0 0 0";
        let (m, st, found) = solve(text);
        assert!(found);
        assert_eq!(st.distance(m.end()), 2);

        let mut plain = PathState::new(&m).unwrap();
        assert!(dijkstra(&m, &mut plain));
        assert_eq!(plain.distance(m.end()), 6);
    }

    #[test]
    fn two_lava_cells_in_series_are_impassable() {
        let (m, st, found) = solve("1 4\n-1 3 3 -2");
        assert!(!found);
        assert!(backtrack(&m, &st, m.len()).is_empty());

        let mut plain = PathState::new(&m).unwrap();
        assert!(dijkstra(&m, &mut plain));
        assert_eq!(plain.distance(m.end()), 2001);
    }

    #[test]
    fn second_lava_forces_a_detour() {
        // Straight along the top needs two crossings; the detour needs none.
        let (m, st, found) = solve("3 5\n-1 3 0 3 -2\n0 1 1 1 0\n0 0 0 0 0");
        assert!(found);
        let path = backtrack(&m, &st, m.len());
        assert_eq!(st.distance(m.end()), 8);
        assert_eq!(lava_on(&m, &path), 0);
    }

    #[test]
    fn route_cost_matches_tolerant_terrain() {
        let (m, st, found) = solve("3 4\n-1 2 3 0\n0 1 0 0\n0 2 0 -2");
        assert!(found);
        let path = backtrack(&m, &st, m.len());
        assert!(lava_on(&m, &path) <= 1);
        assert_eq!(
            path_cost(&TolerantTerrain::new(&m), &path),
            st.distance(m.end())
        );
    }

    #[test]
    fn lava_free_maze_matches_plain_dijkstra() {
        let text = "3 4\n-1 2 0 0\n0 1 2 0\n0 0 0 -2";
        let (m, st, found) = solve(text);
        assert!(found);
        let mut plain = PathState::new(&m).unwrap();
        assert!(dijkstra(&m, &mut plain));
        assert_eq!(st.distance(m.end()), plain.distance(m.end()));
        assert_eq!(
            backtrack(&m, &st, m.len()),
            backtrack(&m, &plain, m.len())
        );
    }
}
