//! Terrain cells and the [`MazeGrid`] that holds them.

use crate::geom::Point;

/// A single maze cell.
///
/// Out-of-bounds positions are not a cell kind: grid lookups return
/// `Option<Terrain>` and answer `None` for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    /// Traversable floor.
    Open,
    /// A wall, rendered as `B`.
    Blocked,
}

impl Terrain {
    /// Whether the cell can be walked on.
    #[inline]
    pub const fn passable(self) -> bool {
        matches!(self, Terrain::Open)
    }
}

/// A 2D grid of [`Terrain`] cells, fixed at construction.
///
/// Rows are stored exactly as parsed and may have differing lengths; no
/// padding is performed. Positions past the end of a short row are outside
/// the grid just like positions beyond its rectangle.
#[derive(Debug, Clone)]
pub struct MazeGrid {
    rows: Vec<Vec<Terrain>>,
    width: i32,
}

impl MazeGrid {
    /// Build a grid from rows of terrain. The width is the longest row.
    pub fn from_rows(rows: Vec<Vec<Terrain>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0) as i32;
        Self { rows, width }
    }

    /// Width of the widest row.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.rows.len() as i32
    }

    /// The terrain at `p`, or `None` if `p` is outside the grid.
    pub fn at(&self, p: Point) -> Option<Terrain> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        self.rows.get(p.y as usize)?.get(p.x as usize).copied()
    }

    /// Whether `p` is a cell of the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.at(p).is_some()
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Terrain]> {
        self.rows.iter().map(Vec::as_slice)
    }
}
