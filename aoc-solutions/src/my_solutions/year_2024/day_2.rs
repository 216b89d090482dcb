use crate::utils::invalid_format;
use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 2, tags = ["2024"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i64>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                line.split_whitespace()
                    .map(str::parse::<i64>)
                    .collect::<Result<Vec<_>, _>>()
                    .with_context(|| format!("line {}", idx + 1))
            })
            .collect::<anyhow::Result<_>>()
            .map_err(invalid_format)
    }
}

/// Monotonic in either direction with every step between 1 and 3
fn is_safe(report: &[i64]) -> bool {
    let increasing = report.windows(2).all(|w| (1..=3).contains(&(w[1] - w[0])));
    let decreasing = report.windows(2).all(|w| (1..=3).contains(&(w[0] - w[1])));
    increasing || decreasing
}

/// Safe as-is, or after dropping any single level
fn is_safe_dampened(report: &[i64]) -> bool {
    is_safe(report)
        || (0..report.len()).any(|skip| {
            let dampened: Vec<i64> = report
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, level)| *level)
                .collect();
            is_safe(&dampened)
        })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared.iter().filter(|report| is_safe(report)).count();
        Ok(safe.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared
            .iter()
            .filter(|report| is_safe_dampened(report))
            .count();
        Ok(safe.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "2");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "4");
    }

    #[test]
    fn test_single_reports() {
        assert!(is_safe(&[7, 6, 4, 2, 1]));
        assert!(!is_safe(&[1, 2, 7, 8, 9]));
        assert!(!is_safe(&[1, 3, 2, 4, 5]));
        assert!(is_safe_dampened(&[1, 3, 2, 4, 5]));
        assert!(!is_safe_dampened(&[1, 2, 7, 8, 9]));
        // equal neighbours are never safe
        assert!(!is_safe(&[4, 4]));
        assert!(is_safe_dampened(&[4, 4]));
    }

    #[test]
    fn test_short_reports_are_safe() {
        assert!(is_safe(&[]));
        assert!(is_safe(&[42]));
    }
}
