use crate::utils::{invalid_format, solve_failed};
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashMap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 1, tags = ["2024", "sorting"])]
pub struct Solver;

/// Both location lists, each sorted ascending
#[derive(Debug)]
pub struct Lists {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Lists;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (mut left, mut right): (Vec<i64>, Vec<i64>) = input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| parse_pair(line).with_context(|| format!("line {}", idx + 1)))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(invalid_format)?
            .into_iter()
            .unzip();

        left.sort_unstable();
        right.sort_unstable();

        Ok(Lists { left, right })
    }
}

fn parse_pair(line: &str) -> anyhow::Result<(i64, i64)> {
    let mut columns = line.split_whitespace().map(str::parse::<i64>);
    match (columns.next(), columns.next(), columns.next()) {
        (Some(left), Some(right), None) => Ok((left?, right?)),
        _ => Err(anyhow!("expected two columns, got {line:?}")),
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let distance = shared
            .left
            .iter()
            .zip(&shared.right)
            .map(|(l, r)| u128::from(l.abs_diff(*r)))
            .try_fold(0u128, u128::checked_add)
            .ok_or_else(|| solve_failed(anyhow!("total distance overflows u128")))?;
        Ok(distance.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut counts: HashMap<i64, i64> = HashMap::new();
        for value in &shared.right {
            *counts.entry(*value).or_default() += 1;
        }

        // an i64 times a count bounded by the list length fits in i128
        let similarity = shared
            .left
            .iter()
            .map(|value| {
                let count = counts.get(value).copied().unwrap_or(0);
                i128::from(*value) * i128::from(count)
            })
            .try_fold(0i128, i128::checked_add)
            .ok_or_else(|| solve_failed(anyhow!("similarity score overflows i128")))?;
        Ok(similarity.to_string())
    }
}
