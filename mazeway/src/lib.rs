//! Mazeway — parse a text maze, search it, draw the result.
//!
//! The library surface binds the pieces together: [`graph::MazeGraph`]
//! adapts a parsed grid to the search engine, and [`solve::solve`] runs
//! the search for a puzzle.

pub mod graph;
pub mod solve;
