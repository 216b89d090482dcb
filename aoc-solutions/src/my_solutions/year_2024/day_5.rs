use crate::utils::invalid_format;
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 5, tags = ["2024", "sorting"])]
pub struct Solver;

/// Page ordering rules plus the updates to check against them
#[derive(Debug)]
pub struct Manual {
    /// `(a, b)` means page `a` must be printed before page `b`
    rules: HashSet<(u64, u64)>,
    /// Distinct updates; a repeated line counts once
    updates: BTreeSet<Vec<u64>>,
}

impl Manual {
    fn compare(&self, a: u64, b: u64) -> Ordering {
        if self.rules.contains(&(a, b)) {
            Ordering::Less
        } else if self.rules.contains(&(b, a)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn is_ordered(&self, update: &[u64]) -> bool {
        update
            .iter()
            .enumerate()
            .all(|(i, later)| {
                update[..i]
                    .iter()
                    .all(|earlier| !self.rules.contains(&(*later, *earlier)))
            })
    }
}

fn middle(update: &[u64]) -> u64 {
    update
        .get(update.len().saturating_sub(1) / 2)
        .copied()
        .unwrap_or(0)
}

impl AocParser for Solver {
    type SharedData<'a> = Manual;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_manual(input).map_err(invalid_format)
    }
}

fn parse_manual(input: &str) -> anyhow::Result<Manual> {
    let mut rules = HashSet::new();
    let mut updates = BTreeSet::new();
    let mut in_rules = true;

    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            in_rules = false;
            continue;
        }

        let context = || format!("line {}", idx + 1);
        if in_rules {
            let (before, after) = line
                .split_once('|')
                .ok_or_else(|| anyhow!("expected `a|b` rule, got {line:?}"))
                .with_context(context)?;
            rules.insert((
                before.trim().parse::<u64>().with_context(context)?,
                after.trim().parse::<u64>().with_context(context)?,
            ));
        } else {
            let update = line
                .split(',')
                .map(|page| page.trim().parse::<u64>())
                .collect::<Result<Vec<_>, _>>()
                .with_context(context)?;
            updates.insert(update);
        }
    }

    Ok(Manual { rules, updates })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u128 = shared
            .updates
            .iter()
            .filter(|update| shared.is_ordered(update))
            .map(|update| u128::from(middle(update)))
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let manual = &*shared;
        let total: u128 = manual
            .updates
            .iter()
            .filter(|update| !manual.is_ordered(update))
            .map(|update| {
                let mut fixed = update.clone();
                fixed.sort_by(|a, b| manual.compare(*a, *b));
                u128::from(middle(&fixed))
            })
            .sum();
        Ok(total.to_string())
    }
}
