use tileboard_core::Point;

/// Minimal pathfinding interface — provides outgoing edges.
pub trait Pather {
    /// Append the tiles reachable in one move from `p` into `buf`. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to `to`, where `to` was produced by
    /// [`Pather::neighbors`]. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}
