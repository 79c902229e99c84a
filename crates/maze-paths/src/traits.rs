use maze_core::Point;

/// Minimal search interface: neighbor enumeration.
pub trait Pather {
    /// Append the traversable neighbors of `p` into `buf`, in a fixed order.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) steps.
pub trait WeightedPather: Pather {
    /// Cost of stepping from `from` into adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}
