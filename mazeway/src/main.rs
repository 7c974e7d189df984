//! mazeway — solve a text maze and print it with the path marked.
//!
//! Reads the maze from a file argument, or stdin when none is given.

use std::env;
use std::fs;
use std::io::Read;

use mazeway_core::{parse_puzzle, render};
use mazeway_lib::graph::MazeGraph;
use mazeway_lib::solve::solve;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let input = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let puzzle = parse_puzzle(&input)?;
    let graph = MazeGraph::new(&puzzle.grid);
    let path = solve(&puzzle, &graph).unwrap_or_default();
    println!("{}", render(&puzzle.grid, &path));
    Ok(())
}
