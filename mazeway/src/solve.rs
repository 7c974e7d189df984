//! Wiring: run the search over a parsed puzzle.

use mazeway_core::{Point, Puzzle};
use mazeway_paths::PathFinder;

use crate::graph::MazeGraph;

/// Compute the shortest start-to-end path over `graph`.
///
/// Returns the predecessor chain ending at the end cell: the full path
/// (both endpoints included) when the end is reachable, or just the end
/// cell itself when it is not. Either way the end cell gets marked when
/// the result is rendered; unreachability is an answer, not an error.
pub fn solve(puzzle: &Puzzle, graph: &MazeGraph<'_>) -> Option<Vec<Point>> {
    let mut finder = PathFinder::new(puzzle.grid.width(), puzzle.grid.height());
    let path = finder.astar_path(graph, puzzle.start, puzzle.end);
    if let Some(p) = &path {
        if p.first() == Some(&puzzle.start) {
            log::debug!(
                "path found: {} cells, cost {:.3}",
                p.len(),
                finder.cost_at(puzzle.end).unwrap_or(0.0)
            );
        } else {
            log::debug!("{} unreachable from {}", puzzle.end, puzzle.start);
        }
    }
    path
}
