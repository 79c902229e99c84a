//! [`Pather`] implementations over a [`Maze`].

use maze_core::{CellKind, Maze, Point};

use crate::lava::TOLERATED_LAVA_COST;
use crate::traits::{Pather, WeightedPather};

/// Standard terrain rules: 4-connected, walls block, each step costs the
/// [`CellKind::step_cost`] of the cell entered.
#[derive(Clone, Copy)]
pub struct Terrain<'a> {
    maze: &'a Maze,
}

impl<'a> Terrain<'a> {
    pub fn new(maze: &'a Maze) -> Self {
        Self { maze }
    }
}

impl Pather for Terrain<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.maze.is_traversable(n) {
                buf.push(n);
            }
        }
    }
}

impl WeightedPather for Terrain<'_> {
    fn cost(&self, _from: Point, to: Point) -> i32 {
        self.maze
            .at(to)
            .and_then(CellKind::step_cost)
            .unwrap_or(i32::MAX)
    }
}

/// Terrain rules of the one-lava search: same neighbors, but entering lava
/// costs [`TOLERATED_LAVA_COST`] instead of the soft-wall penalty.
///
/// Only meaningful for routes crossing at most one lava cell.
#[derive(Clone, Copy)]
pub struct TolerantTerrain<'a> {
    terrain: Terrain<'a>,
}

impl<'a> TolerantTerrain<'a> {
    pub fn new(maze: &'a Maze) -> Self {
        Self {
            terrain: Terrain::new(maze),
        }
    }
}

impl Pather for TolerantTerrain<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.terrain.neighbors(p, buf);
    }
}

impl WeightedPather for TolerantTerrain<'_> {
    fn cost(&self, from: Point, to: Point) -> i32 {
        match self.terrain.maze.at(to) {
            Some(CellKind::Lava) => TOLERATED_LAVA_COST,
            _ => self.terrain.cost(from, to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_skip_walls_and_edges() {
        let m = Maze::parse("2 3\n-1 1 0\n2 3 -2").unwrap();
        let t = Terrain::new(&m);
        let mut buf = Vec::new();
        t.neighbors(Point::new(0, 0), &mut buf);
        // up/left are out of range, right is a wall
        assert_eq!(buf, vec![Point::new(0, 1)]);

        buf.clear();
        t.neighbors(Point::new(1, 1), &mut buf);
        // up is a wall; down out of range; left, right
        assert_eq!(buf, vec![Point::new(0, 1), Point::new(2, 1)]);
    }

    #[test]
    fn step_costs() {
        let m = Maze::parse("2 3\n-1 1 0\n2 3 -2").unwrap();
        let t = Terrain::new(&m);
        let from = Point::new(0, 0);
        assert_eq!(t.cost(from, Point::new(0, 1)), 3);
        assert_eq!(t.cost(from, Point::new(1, 1)), 1000);
        assert_eq!(t.cost(from, Point::new(2, 1)), 1);

        let tol = TolerantTerrain::new(&m);
        assert_eq!(tol.cost(from, Point::new(1, 1)), TOLERATED_LAVA_COST);
        assert_eq!(tol.cost(from, Point::new(0, 1)), 3);
    }
}
