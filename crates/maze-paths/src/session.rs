use log::{debug, info};
use maze_core::Maze;

use crate::algorithm::{Algorithm, Route, Selection};
use crate::error::PathError;
use crate::state::PathState;

/// The active search result for one maze.
///
/// Holds at most one [`PathState`] and one [`Route`]. Each selection event
/// releases the previous state before allocating the next, so stale labels
/// never leak from one algorithm into another.
pub struct PathSession<'m> {
    maze: &'m Maze,
    state: Option<PathState>,
    route: Option<Route>,
}

impl<'m> PathSession<'m> {
    pub fn new(maze: &'m Maze) -> Self {
        Self {
            maze,
            state: None,
            route: None,
        }
    }

    /// The maze being searched.
    pub fn maze(&self) -> &'m Maze {
        self.maze
    }

    /// Handle a selection event. Returns the new route, or `None` after a
    /// clear.
    pub fn apply(&mut self, selection: Selection) -> Result<Option<&Route>, PathError> {
        match selection {
            Selection::Run(alg) => self.select(alg).map(Some),
            Selection::Clear => {
                self.clear();
                Ok(None)
            }
        }
    }

    /// Run `alg` on a fresh state, replacing any previous result.
    ///
    /// If the state cannot be allocated the session is left cleared.
    pub fn select(&mut self, alg: Algorithm) -> Result<&Route, PathError> {
        self.clear();
        let mut state = PathState::new(self.maze)?;
        let route = alg.route(self.maze, &mut state)?;
        info!(
            "{alg}: {}",
            match (route.hops(), route.cost) {
                (Some(hops), Some(cost)) => format!("{hops} steps, cost {cost}"),
                _ => "no path".to_string(),
            }
        );
        self.state = Some(state);
        Ok(self.route.insert(route))
    }

    /// Drop the current state and route.
    pub fn clear(&mut self) {
        if self.state.take().is_some() {
            debug!("released search state");
        }
        self.route = None;
    }

    /// The current route, if an algorithm is active.
    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    /// The search state behind the current route.
    pub fn state(&self) -> Option<&PathState> {
        self.state.as_ref()
    }

    /// The active algorithm, if any.
    pub fn active(&self) -> Option<Algorithm> {
        self.route.as_ref().map(|r| r.algorithm)
    }
}

#[cfg(test)]
mod tests {
    use maze_core::Point;

    use super::*;

    #[test]
    fn one_result_at_a_time() {
        let m = Maze::parse("3 3\n-1 3 -2\n0 1 0\n0 0 0").unwrap();
        let mut session = PathSession::new(&m);
        assert!(session.route().is_none());

        let route = session.select(Algorithm::Dijkstra).unwrap();
        assert_eq!(route.cost, Some(6));
        assert_eq!(session.active(), Some(Algorithm::Dijkstra));

        let route = session
            .apply(Selection::Run(Algorithm::DijkstraOneLava))
            .unwrap()
            .unwrap();
        assert_eq!(route.cost, Some(2));
        assert_eq!(session.active(), Some(Algorithm::DijkstraOneLava));

        assert!(session.apply(Selection::Clear).unwrap().is_none());
        assert!(session.route().is_none());
        assert!(session.state().is_none());
        assert_eq!(session.active(), None);
    }

    #[test]
    fn fresh_state_per_selection() {
        let m = Maze::parse("2 3\n-1 0 0\n0 0 -2").unwrap();
        let mut session = PathSession::new(&m);
        // DFS never labels distances, so nothing from Dijkstra may survive.
        session.select(Algorithm::Dijkstra).unwrap();
        assert_eq!(session.state().unwrap().distance(m.end()), 3);
        session.select(Algorithm::Dfs).unwrap();
        let st = session.state().unwrap();
        assert_eq!(st.distance(m.end()), crate::UNREACHABLE);
        assert_eq!(st.distance(Point::new(1, 0)), crate::UNREACHABLE);
    }

    #[test]
    fn reselecting_is_idempotent() {
        let m = Maze::parse("3 4\n-1 0 2 0\n0 1 0 0\n0 0 3 -2").unwrap();
        let mut session = PathSession::new(&m);
        for alg in Algorithm::ALL {
            let first = session.select(alg).unwrap().clone();
            let second = session.select(alg).unwrap().clone();
            assert_eq!(first, second, "{alg}");
        }
    }

    #[test]
    fn failed_search_keeps_an_empty_route() {
        let m = Maze::parse("1 3\n-1 1 -2").unwrap();
        let mut session = PathSession::new(&m);
        let route = session.select(Algorithm::Bfs).unwrap();
        assert!(!route.is_found());
        assert_eq!(session.active(), Some(Algorithm::Bfs));
    }
}
