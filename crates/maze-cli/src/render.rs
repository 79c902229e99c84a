//! Plain-text output for solved mazes.

use maze_core::{CellKind, Maze};
use maze_paths::Route;

/// Route cells other than the start and end.
pub const ROUTE_GLYPH: char = '*';

/// Draw `maze` with `route` overlaid, one line per row.
pub fn overlay(maze: &Maze, route: &Route) -> String {
    let mut glyphs: Vec<char> = maze.cells().iter().map(|c| c.glyph()).collect();
    for &p in &route.path {
        if let Some(i) = maze.index(p) {
            if !matches!(maze.cells()[i], CellKind::Start | CellKind::End) {
                glyphs[i] = ROUTE_GLYPH;
            }
        }
    }
    let mut out = String::with_capacity(glyphs.len() + maze.rows());
    for row in glyphs.chunks(maze.cols()) {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// One-line outcome: found flag, hops and cost.
pub fn summary(route: &Route) -> String {
    match (route.hops(), route.cost) {
        (Some(hops), Some(cost)) => {
            format!("{}: found, {hops} steps, cost {cost}", route.algorithm)
        }
        _ => format!("{}: no path", route.algorithm),
    }
}
