//! Depth-first search with an explicit frame stack.

use log::debug;
use maze_core::{Maze, Point};

use crate::state::PathState;
use crate::terrain::Terrain;
use crate::traits::Pather;

/// Depth-first search from the maze's start to its end.
///
/// See [`dfs_with`].
pub fn dfs(maze: &Maze, state: &mut PathState) -> bool {
    dfs_with(&Terrain::new(maze), maze.start(), maze.end(), state)
}

/// Depth-first search from `from` to `to` over `pather`.
///
/// Neighbors are tried in the pather's order and the search descends into
/// the first unvisited one, so the route returned is the first one found,
/// not necessarily the shortest. Parent links are written only along the
/// successful branch, once `to` is reached.
///
/// Each stack frame is `(cell, index of the next neighbor to try)`, so the
/// depth is bounded by the number of cells rather than the call stack.
pub fn dfs_with<P: Pather>(pather: &P, from: Point, to: Point, state: &mut PathState) -> bool {
    if from == to {
        return true;
    }

    state.mark_visited(from);
    let mut stack: Vec<(Point, usize)> = vec![(from, 0)];
    let mut nbuf = Vec::with_capacity(4);

    while let Some(frame) = stack.last_mut() {
        let (cur, next) = *frame;
        nbuf.clear();
        pather.neighbors(cur, &mut nbuf);

        let step = nbuf
            .iter()
            .enumerate()
            .skip(next)
            .find(|&(_, &n)| !state.visited(n))
            .map(|(i, &n)| (i, n));

        let Some((i, n)) = step else {
            stack.pop();
            continue;
        };
        frame.1 = i + 1;

        if n == to {
            for w in stack.windows(2) {
                state.set_parent(w[1].0, Some(w[0].0));
            }
            state.set_parent(to, Some(cur));
            debug!("DFS reached {to} at depth {}", stack.len());
            return true;
        }

        state.mark_visited(n);
        stack.push((n, 0));
    }

    debug!("DFS exhausted {} cells without reaching {to}", state.visited_count());
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backtrack::backtrack;

    #[test]
    fn follows_the_only_corridor() {
        let m = Maze::parse("3 3\n-1 0 1\n1 0 1\n1 0 -2").unwrap();
        let mut st = PathState::new(&m).unwrap();
        assert!(dfs(&m, &mut st));
        assert_eq!(st.parent(m.start()), None);
        assert_eq!(st.parent(m.end()), Some(Point::new(1, 2)));
        assert_eq!(
            backtrack(&m, &st, m.len()),
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn prefers_up_then_down_then_left_then_right() {
        // Start in the middle row; both the upper and lower rows lead to
        // the end, but "up" is tried first.
        let m = Maze::parse("3 3\n0 0 0\n-1 1 -2\n0 0 0").unwrap();
        let mut st = PathState::new(&m).unwrap();
        assert!(dfs(&m, &mut st));
        let path = backtrack(&m, &st, m.len());
        assert_eq!(path[1], Point::new(0, 0));
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn dead_ends_leave_no_parents() {
        // The first branch (up) is a dead end; DFS backs out of it.
        let m = Maze::parse("3 3\n0 1 1\n-1 0 -2\n1 1 1").unwrap();
        let mut st = PathState::new(&m).unwrap();
        assert!(dfs(&m, &mut st));
        assert!(st.visited(Point::new(0, 0)));
        assert_eq!(st.parent(Point::new(0, 0)), None);
        assert_eq!(st.parent(m.end()), Some(Point::new(1, 1)));
    }

    #[test]
    fn sealed_end_is_unreachable() {
        let m = Maze::parse("2 3\n-1 1 -2\n0 1 0").unwrap();
        let mut st = PathState::new(&m).unwrap();
        assert!(!dfs(&m, &mut st));
        assert_eq!(st.parent(m.end()), None);
        assert_eq!(st.visited_count(), 2);
    }

    #[test]
    fn deep_serpentine_does_not_recurse() {
        // A 20x20 serpentine corridor: every other row is open, connected
        // by alternating gaps, so the search must go 200+ frames deep.
        let mut text = String::from("20 20\n");
        for y in 0..20 {
            let row: Vec<&str> = (0..20)
                .map(|x| {
                    if (x, y) == (0, 0) {
                        "-1"
                    } else if (x, y) == (0, 18) {
                        "-2"
                    } else if y % 2 == 0 {
                        "0"
                    } else if (y % 4 == 1 && x == 19) || (y % 4 == 3 && x == 0) {
                        "0"
                    } else {
                        "1"
                    }
                })
                .collect();
            text.push_str(&row.join(" "));
            text.push('\n');
        }
        let m = Maze::parse(&text).unwrap();
        let mut st = PathState::new(&m).unwrap();
        assert!(dfs(&m, &mut st));
        let path = backtrack(&m, &st, m.len());
        assert_eq!(path.first(), Some(&m.start()));
        assert_eq!(path.last(), Some(&m.end()));
        assert!(path.len() > 150);
    }
}
