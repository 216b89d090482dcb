use crate::utils::invalid_format;
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 7, tags = ["2024", "recursion"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    target: u64,
    operands: Vec<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Add,
    Mul,
    Concat,
}

impl Operator {
    /// `None` on overflow, which can never reach the target anyway
    fn apply(self, lhs: u64, rhs: u64) -> Option<u64> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Mul => lhs.checked_mul(rhs),
            Operator::Concat => {
                let shift = 10u64.checked_pow(rhs.checked_ilog10().unwrap_or(0) + 1)?;
                lhs.checked_mul(shift)?.checked_add(rhs)
            }
        }
    }
}

impl Equation {
    fn satisfiable(&self, operators: &[Operator]) -> bool {
        match self.operands.split_first() {
            Some((first, rest)) => reaches(self.target, *first, rest, operators),
            None => false,
        }
    }
}

fn reaches(target: u64, acc: u64, rest: &[u64], operators: &[Operator]) -> bool {
    if acc > target {
        return false;
    }
    let Some((next, rest)) = rest.split_first() else {
        return acc == target;
    };
    operators.iter().any(|op| {
        op.apply(acc, *next)
            .is_some_and(|acc| reaches(target, acc, rest, operators))
    })
}

fn parse_equation(line: &str) -> anyhow::Result<Equation> {
    let (target, operands) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("expected `target: operands`, got {line:?}"))?;
    let target = target.trim().parse::<u64>().context("target")?;
    let operands = operands
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<u64>, _>>()
        .context("operands")?;
    if operands.is_empty() {
        return Err(anyhow!("no operands in {line:?}"));
    }
    Ok(Equation { target, operands })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Equation>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| parse_equation(line).with_context(|| format!("line {}", idx + 1)))
            .collect::<anyhow::Result<_>>()
            .map_err(invalid_format)
    }
}

/// Sum of the targets of the satisfiable equations, widened so many large
/// targets cannot overflow
fn calibration(equations: &[Equation], operators: &[Operator]) -> u128 {
    equations
        .iter()
        .filter(|equation| equation.satisfiable(operators))
        .map(|equation| u128::from(equation.target))
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(shared, &[Operator::Add, Operator::Mul]).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let operators = [Operator::Add, Operator::Mul, Operator::Concat];
        Ok(calibration(shared, &operators).to_string())
    }
}
