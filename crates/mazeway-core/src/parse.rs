//! Parsing puzzle text into a [`Puzzle`].
//!
//! Each input line is one grid row. `.` is open floor, `B` a wall, `S` the
//! start and `X` the end (both open). Any other character is treated as a
//! wall.

use std::fmt;

use crate::geom::Point;
use crate::grid::{MazeGrid, Terrain};

/// A parsed maze: the grid plus its start and end coordinates.
///
/// Both markers are guaranteed to designate [`Terrain::Open`] cells within
/// the grid.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub start: Point,
    pub end: Point,
    pub grid: MazeGrid,
}

/// Parse puzzle text into a [`Puzzle`].
///
/// Dimensions mirror the input exactly; rows may have differing lengths.
/// If a marker occurs more than once, the last occurrence wins. Input
/// missing either marker is rejected.
pub fn parse_puzzle(input: &str) -> Result<Puzzle, ParseError> {
    let mut start = None;
    let mut end = None;
    let mut rows = Vec::new();

    for (y, line) in input.lines().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (x, ch) in line.chars().enumerate() {
            let p = Point::new(x as i32, y as i32);
            row.push(match ch {
                '.' => Terrain::Open,
                'S' => {
                    start = Some(p);
                    Terrain::Open
                }
                'X' => {
                    end = Some(p);
                    Terrain::Open
                }
                // `B` and anything unrecognized are both walls.
                _ => Terrain::Blocked,
            });
        }
        rows.push(row);
    }

    let start = start.ok_or(ParseError::MissingStart)?;
    let end = end.ok_or(ParseError::MissingEnd)?;
    Ok(Puzzle {
        start,
        end,
        grid: MazeGrid::from_rows(rows),
    })
}

/// Errors from [`parse_puzzle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input contains no `S` marker.
    MissingStart,
    /// The input contains no `X` marker.
    MissingEnd,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => write!(f, "puzzle has no start marker (`S`)"),
            Self::MissingEnd => write!(f, "puzzle has no end marker (`X`)"),
        }
    }
}

impl std::error::Error for ParseError {}
