//! Helpers shared by several solutions

pub mod grid;
pub mod point;

pub use grid::Grid;
pub use point::Point;

use aoc_solver::{ParseError, SolveError};

/// Flatten an `anyhow` error chain into the framework's parse error
pub fn invalid_format(err: anyhow::Error) -> ParseError {
    ParseError::InvalidFormat(format!("{err:#}"))
}

/// Wrap an `anyhow` error as a failed solve
pub fn solve_failed(err: anyhow::Error) -> SolveError {
    SolveError::SolveFailed(err.into())
}
