//! Maze generation.
//!
//! The grid starts as solid wall. Random walks from the centre carve open
//! ground until the requested share of the area is open; some carved cells
//! then become grass or lava. The walk origin is the start and the carved
//! cell farthest from it becomes the end. Because every walk begins at the
//! origin and moves one cardinal step at a time, the carved region is
//! connected, so the end is always reachable.

use log::{debug, info};
use maze_core::{Bounds, CellKind, Maze, MazeError, MazeLimits, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Trait for choosing a random neighbor during random-walk carving.
pub trait RandomWalker {
    /// Given a position `p`, return a random neighbor using `rng`.
    fn neighbor(&self, p: Point, rng: &mut impl Rng) -> Point;
}

/// A simple 4-directional random walker.
pub struct FourDirectionWalker;

impl RandomWalker for FourDirectionWalker {
    fn neighbor(&self, p: Point, rng: &mut impl Rng) -> Point {
        match rng.random_range(0..4u32) {
            0 => Point::new(p.x + 1, p.y),
            1 => Point::new(p.x - 1, p.y),
            2 => Point::new(p.x, p.y + 1),
            _ => Point::new(p.x, p.y - 1),
        }
    }
}

/// Generation parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenConfig {
    /// Share of the area to carve open, in (0, 1].
    pub fill_pct: f64,
    /// Number of walks started from the origin.
    pub walks: usize,
    /// Chance that a carved cell becomes grass.
    pub grass_pct: f64,
    /// Chance that a carved cell becomes lava.
    pub lava_pct: f64,
    /// Dimension bound the result must respect.
    pub limits: MazeLimits,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            fill_pct: 0.5,
            walks: 8,
            grass_pct: 0.15,
            lava_pct: 0.05,
            limits: MazeLimits::default(),
        }
    }
}

impl GenConfig {
    fn validate(&self) -> Result<(), MazeError> {
        let unit = |v: f64| (0.0..=1.0).contains(&v);
        if !(self.fill_pct > 0.0 && self.fill_pct <= 1.0) {
            return Err(MazeError::InvalidConfig(format!(
                "fill_pct {} not in (0, 1]",
                self.fill_pct
            )));
        }
        if !unit(self.grass_pct) || !unit(self.lava_pct) || self.grass_pct + self.lava_pct > 1.0 {
            return Err(MazeError::InvalidConfig(format!(
                "grass_pct {} and lava_pct {} must be in [0, 1] and sum to at most 1",
                self.grass_pct, self.lava_pct
            )));
        }
        if self.walks == 0 {
            return Err(MazeError::InvalidConfig("walks must be at least 1".into()));
        }
        Ok(())
    }
}

/// Maze generator.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub config: GenConfig,
}

impl MazeGen<StdRng> {
    /// A reproducible generator.
    pub fn seeded(config: GenConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MazeGen<R> {
    pub fn new(config: GenConfig, rng: R) -> Self {
        Self { rng, config }
    }

    /// Generate a `rows x cols` maze with exactly one start and one end and
    /// a traversable route between them.
    pub fn generate(&mut self, rows: usize, cols: usize) -> Result<Maze, MazeError> {
        self.config.validate()?;
        let bounds = self.config.limits.bounds(rows, cols)?;
        let total = bounds.len();
        if total < 2 {
            return Err(MazeError::InvalidConfig(format!(
                "a {rows}x{cols} maze has no room for both a start and an end"
            )));
        }
        let idx = |p: Point| bounds.index(p).unwrap_or(0);
        let mut cells = vec![CellKind::Wall; total];

        let origin = Point::new(cols as i32 / 2, rows as i32 / 2);
        let carved = self.random_walk(&mut cells, bounds, origin);
        debug!("carved {carved} of {} cells", cells.len());

        for p in bounds.iter().filter(|&p| p != origin) {
            let i = idx(p);
            if cells[i] != CellKind::Ground {
                continue;
            }
            let r: f64 = self.rng.random();
            if r < self.config.lava_pct {
                cells[i] = CellKind::Lava;
            } else if r < self.config.lava_pct + self.config.grass_pct {
                cells[i] = CellKind::Grass;
            }
        }

        let mut end = origin;
        for p in bounds.iter() {
            if cells[idx(p)].is_traversable() && p.manhattan(origin) > end.manhattan(origin) {
                end = p;
            }
        }
        cells[idx(origin)] = CellKind::Start;
        cells[idx(end)] = CellKind::End;

        info!("generated {rows}x{cols} maze: start {origin}, end {end}");
        Maze::from_cells(rows, cols, cells, &self.config.limits)
    }

    /// Carve ground with random walks from `origin` until `fill_pct` of the
    /// area is open. Returns the number of cells carved (at least 2).
    fn random_walk(&mut self, cells: &mut [CellKind], bounds: Bounds, origin: Point) -> usize {
        let total = cells.len();
        let target = ((total as f64 * self.config.fill_pct) as usize).max(2);
        let idx = |p: Point| bounds.index(p).unwrap_or(0);
        let walker = FourDirectionWalker;
        let mut carved = 0usize;

        'walks: for _ in 0..self.config.walks {
            let mut pos = origin;
            let step_limit = total.saturating_mul(4); // safety limit per walk

            for _ in 0..step_limit {
                if carved >= target {
                    break 'walks;
                }
                if cells[idx(pos)] != CellKind::Ground {
                    cells[idx(pos)] = CellKind::Ground;
                    carved += 1;
                }
                let next = walker.neighbor(pos, &mut self.rng);
                if bounds.contains(next) {
                    pos = next;
                }
            }
        }

        // Unlucky walks on tiny grids may never leave the origin.
        if carved < 2 {
            if let Some(n) = origin
                .neighbors_4()
                .into_iter()
                .find(|&n| bounds.contains(n) && cells[idx(n)] == CellKind::Wall)
            {
                cells[idx(n)] = CellKind::Ground;
                carved += 1;
            }
        }
        carved
    }
}
