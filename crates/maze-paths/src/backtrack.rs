use log::{debug, warn};
use maze_core::{Maze, Point};

use crate::state::PathState;
use crate::traits::WeightedPather;

/// Rebuild the start→end route from `state`'s parent links.
///
/// Walks from the maze's end through `parent` until a cell without a parent
/// is reached, collecting at most `max_len` cells. Returns an empty route if
/// the bound is exhausted first (a corrupt or cyclic chain) or if the chain
/// does not terminate at the start (a partial or disconnected state).
///
/// On success the route lists every cell from start to end inclusive, so
/// its length is the hop count plus one.
pub fn backtrack(maze: &Maze, state: &PathState, max_len: usize) -> Vec<Point> {
    let mut path = Vec::new();
    let mut cur = Some(maze.end());

    while let Some(p) = cur {
        if path.len() >= max_len {
            warn!("backtrack exceeded the maximum route length {max_len}");
            return Vec::new();
        }
        path.push(p);
        cur = state.parent(p);
    }

    if path.last() != Some(&maze.start()) {
        warn!("backtrack did not reach the start; the route is not connected");
        return Vec::new();
    }

    path.reverse();
    debug!("route reconstructed, {} cells", path.len());
    path
}

/// Total cost of walking `path` under `pather`: the cost of every step after
/// the first cell. Empty and single-cell paths cost 0.
pub fn path_cost<P: WeightedPather>(pather: &P, path: &[Point]) -> i32 {
    path.windows(2)
        .map(|w| pather.cost(w[0], w[1]))
        .fold(0, i32::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::Terrain;

    fn maze() -> Maze {
        Maze::parse("1 4\n-1 0 2 -2").unwrap()
    }

    fn chain(m: &Maze) -> PathState {
        let mut st = PathState::new(m).unwrap();
        for x in 1..4 {
            st.set_parent(Point::new(x, 0), Some(Point::new(x - 1, 0)));
        }
        st
    }

    #[test]
    fn reverses_into_start_to_end_order() {
        let m = maze();
        let path = backtrack(&m, &chain(&m), m.len());
        assert_eq!(
            path,
            (0..4).map(|x| Point::new(x, 0)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn exact_bound_is_enough() {
        let m = maze();
        assert_eq!(backtrack(&m, &chain(&m), 4).len(), 4);
        assert!(backtrack(&m, &chain(&m), 3).is_empty());
        assert!(backtrack(&m, &chain(&m), 0).is_empty());
    }

    #[test]
    fn cyclic_chain_is_rejected() {
        let m = maze();
        let mut st = PathState::new(&m).unwrap();
        st.set_parent(Point::new(3, 0), Some(Point::new(2, 0)));
        st.set_parent(Point::new(2, 0), Some(Point::new(3, 0)));
        assert!(backtrack(&m, &st, m.len()).is_empty());
    }

    #[test]
    fn chain_not_ending_at_start_is_rejected() {
        let m = maze();
        let mut st = PathState::new(&m).unwrap();
        st.set_parent(Point::new(3, 0), Some(Point::new(2, 0)));
        assert!(backtrack(&m, &st, m.len()).is_empty());
        // a fresh state has no parent at the end at all
        assert!(backtrack(&m, &PathState::new(&m).unwrap(), m.len()).is_empty());
    }

    #[test]
    fn cost_sums_cells_entered() {
        let m = maze();
        let path = backtrack(&m, &chain(&m), m.len());
        let t = Terrain::new(&m);
        assert_eq!(path_cost(&t, &path), 1 + 3 + 1);
        assert_eq!(path_cost(&t, &path[..1]), 0);
        assert_eq!(path_cost(&t, &[]), 0);
    }
}
