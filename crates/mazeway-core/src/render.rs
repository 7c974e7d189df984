//! Rendering a maze back to text, with path cells marked.

use std::collections::HashSet;

use crate::geom::Point;
use crate::grid::{MazeGrid, Terrain};

/// Render `grid` as text, marking every cell in `path` with `*`.
///
/// One line per row, newline-joined, mirroring the parsed shape. Walls
/// render as `B` even when `path` crosses them; open cells render as `*`
/// on the path and `.` otherwise. Start and end are not distinguished:
/// when a path exists they are part of it and render as `*`. Passing an
/// empty `path` reproduces the bare maze layout.
pub fn render(grid: &MazeGrid, path: &[Point]) -> String {
    let marks: HashSet<Point> = path.iter().copied().collect();
    let mut out = String::new();
    for (y, row) in grid.rows().enumerate() {
        if y > 0 {
            out.push('\n');
        }
        for (x, &cell) in row.iter().enumerate() {
            out.push(match cell {
                Terrain::Blocked => 'B',
                Terrain::Open if marks.contains(&Point::new(x as i32, y as i32)) => '*',
                Terrain::Open => '.',
            });
        }
    }
    out
}
