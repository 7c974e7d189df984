//! The search surface over a parsed maze.

use mazeway_core::{MazeGrid, Point};
use mazeway_paths::{Graph, euclidean};

/// Cost of a horizontal or vertical step.
pub const ORTHOGONAL_COST: f32 = 1.0;

/// Cost of a diagonal step: the Euclidean length of the move.
pub const DIAGONAL_COST: f32 = std::f32::consts::SQRT_2;

/// Diagonal weighting historically used by the puzzle format.
///
/// Slightly heavier than the geometric √2, so solutions prefer orthogonal
/// detours a little more often. Still never below the Euclidean heuristic;
/// kept for output parity with older solvers.
pub const LEGACY_DIAGONAL_COST: f32 = 1.5;

/// Adapts a [`MazeGrid`] to the [`Graph`] search surface.
///
/// Neighbors are the up-to-8 surrounding cells, enumerated row offset
/// first and column offset second, so tie-breaking between equal-cost
/// paths is reproducible.
pub struct MazeGraph<'a> {
    grid: &'a MazeGrid,
    passable_blocks: bool,
    diagonal_cost: f32,
}

impl<'a> MazeGraph<'a> {
    /// Create a graph over `grid`: walls impassable, diagonal steps costing
    /// their Euclidean length.
    pub fn new(grid: &'a MazeGrid) -> Self {
        Self {
            grid,
            passable_blocks: false,
            diagonal_cost: DIAGONAL_COST,
        }
    }

    /// Let the search route through walls (builder).
    ///
    /// Walls still render as `B`. This matches older solver behavior
    /// where a blocked cell only affected drawing, not traversal.
    pub fn passable_blocks(mut self, yes: bool) -> Self {
        self.passable_blocks = yes;
        self
    }

    /// Override the diagonal step cost (builder), e.g.
    /// [`LEGACY_DIAGONAL_COST`].
    pub fn diagonal_cost(mut self, cost: f32) -> Self {
        self.diagonal_cost = cost;
        self
    }
}

impl Graph for MazeGraph<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let np = p.shift(dx, dy);
                let walkable = self
                    .grid
                    .at(np)
                    .is_some_and(|t| t.passable() || self.passable_blocks);
                if walkable {
                    buf.push(np);
                }
            }
        }
    }

    fn cost(&self, from: Point, to: Point) -> f32 {
        if from.x == to.x || from.y == to.y {
            ORTHOGONAL_COST
        } else {
            self.diagonal_cost
        }
    }

    fn estimate(&self, from: Point, to: Point) -> f32 {
        euclidean(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazeway_core::parse_puzzle;

    fn neighbors_of(g: &MazeGraph<'_>, p: Point) -> Vec<Point> {
        let mut buf = Vec::new();
        g.neighbors(p, &mut buf);
        buf
    }

    #[test]
    fn eight_way_enumeration_order() {
        let p = parse_puzzle("...\n.S.\n..X").unwrap();
        let g = MazeGraph::new(&p.grid);
        let ns = neighbors_of(&g, Point::new(1, 1));
        assert_eq!(
            ns,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn edges_stop_at_grid_bounds() {
        let p = parse_puzzle("S.\n.X").unwrap();
        let g = MazeGraph::new(&p.grid);
        let ns = neighbors_of(&g, Point::new(0, 0));
        assert_eq!(
            ns,
            vec![Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]
        );
    }

    #[test]
    fn edges_stop_at_short_row_ends() {
        // Row 0 is two cells wide, row 1 is four. The corner cell has no
        // neighbors above its missing right-hand side.
        let p = parse_puzzle("S.\n...X").unwrap();
        let g = MazeGraph::new(&p.grid);
        let ns = neighbors_of(&g, Point::new(2, 1));
        assert_eq!(
            ns,
            vec![Point::new(1, 0), Point::new(1, 1), Point::new(3, 1)]
        );
    }

    #[test]
    fn walls_excluded_by_default() {
        let p = parse_puzzle("SB\n.X").unwrap();
        let g = MazeGraph::new(&p.grid);
        let ns = neighbors_of(&g, Point::new(0, 0));
        assert_eq!(ns, vec![Point::new(0, 1), Point::new(1, 1)]);
    }

    #[test]
    fn walls_included_when_passable() {
        let p = parse_puzzle("SB\n.X").unwrap();
        let g = MazeGraph::new(&p.grid).passable_blocks(true);
        let ns = neighbors_of(&g, Point::new(0, 0));
        assert_eq!(
            ns,
            vec![Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]
        );
    }

    #[test]
    fn step_costs() {
        let p = parse_puzzle("S.\n.X").unwrap();
        let g = MazeGraph::new(&p.grid);
        let o = Point::new(0, 0);
        assert_eq!(g.cost(o, Point::new(1, 0)), 1.0);
        assert_eq!(g.cost(o, Point::new(0, 1)), 1.0);
        assert_eq!(g.cost(o, Point::new(1, 1)), std::f32::consts::SQRT_2);

        let legacy = MazeGraph::new(&p.grid).diagonal_cost(LEGACY_DIAGONAL_COST);
        assert_eq!(legacy.cost(o, Point::new(1, 1)), 1.5);
        assert_eq!(legacy.cost(o, Point::new(1, 0)), 1.0);
    }

    #[test]
    fn estimate_is_euclidean() {
        let p = parse_puzzle("S..\n..X").unwrap();
        let g = MazeGraph::new(&p.grid);
        assert_eq!(g.estimate(Point::new(0, 0), Point::new(3, 4)), 5.0);
        assert_eq!(g.estimate(p.end, p.end), 0.0);
    }
}
