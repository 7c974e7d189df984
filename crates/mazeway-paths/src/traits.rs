use mazeway_core::Point;

/// Search surface over a maze: neighbor enumeration, edge costs, and a
/// heuristic estimate toward the goal.
pub trait Graph {
    /// Append the neighbors of `p` into `buf`. The caller clears `buf`
    /// before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> f32;

    /// Heuristic estimate of the remaining cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible) for the search
    /// to return minimum-cost paths.
    fn estimate(&self, from: Point, to: Point) -> f32;
}
