//! Runs one registered solver against an input file

use crate::error::CliError;
use aoc_solver::{SolveResult, SolverError, SolverRegistry, Star};
use chrono::TimeDelta;
use std::path::Path;

/// Answers of one run, in part order
#[derive(Debug)]
pub struct SolveReport {
    pub parse: TimeDelta,
    pub parts: Vec<(u8, SolveResult)>,
}

/// Read the puzzle input at `path`
pub fn read_input(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Input {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse `input` once and solve every part selected by `star`
///
/// `Star::All` selects the parts the solver actually has; an explicit star the
/// solver lacks is a `SolveError::PartOutOfRange`.
pub fn run_solver(
    registry: &SolverRegistry,
    year: u16,
    day: u8,
    input: &str,
    star: Star,
) -> Result<SolveReport, CliError> {
    let info = registry
        .info(year, day)
        .ok_or(SolverError::NotFound(year, day))?;
    tracing::debug!(year, day, parts = info.parts, tags = ?info.tags, "running solver");

    let mut solver = registry.create_solver(year, day, input)?;
    let available = info.parts;

    let mut parts = Vec::new();
    for part in star
        .parts()
        .filter(|part| star != Star::All || *part <= available)
    {
        let result = solver.solve(part)?;
        parts.push((part, result));
    }

    Ok(SolveReport {
        parse: solver.parse_duration(),
        parts,
    })
}
