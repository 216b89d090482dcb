use crate::utils::{invalid_format, solve_failed};
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;
use std::sync::LazyLock;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 3, tags = ["2024", "regex"])]
pub struct Solver;

static INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(mul|do|don't)\((?:(\d+),(\d+))?\)").expect("instruction pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instruction {
    Mul(u64, u64),
    Do,
    Dont,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    all: u128,
    enabled: u128,
}

/// Instructions found in the corrupted memory; totals are computed once for
/// both stars
#[derive(Debug)]
pub struct Program {
    instructions: Vec<Instruction>,
    totals: Option<Totals>,
}

impl AocParser for Solver {
    type SharedData<'a> = Program;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let instructions = instructions(input)
            .collect::<anyhow::Result<_>>()
            .map_err(invalid_format)?;
        Ok(Program {
            instructions,
            totals: None,
        })
    }
}

fn instructions(memory: &str) -> impl Iterator<Item = anyhow::Result<Instruction>> + '_ {
    INSTRUCTION.captures_iter(memory).filter_map(|caps| {
        let operands = caps.get(2).zip(caps.get(3));
        match (&caps[1], operands) {
            ("mul", Some((a, b))) => Some(
                a.as_str()
                    .parse()
                    .and_then(|a| b.as_str().parse().map(|b| Instruction::Mul(a, b)))
                    .with_context(|| format!("operand out of range in {:?}", &caps[0])),
            ),
            ("do", None) => Some(Ok(Instruction::Do)),
            ("don't", None) => Some(Ok(Instruction::Dont)),
            // `mul()` without operands, `do(1,2)` and friends are noise
            _ => None,
        }
    })
}

impl Program {
    fn totals(&mut self) -> Result<Totals, SolveError> {
        if let Some(totals) = self.totals {
            return Ok(totals);
        }

        let mut totals = Totals::default();
        let mut enabled = true;
        for instruction in &self.instructions {
            match *instruction {
                Instruction::Mul(a, b) => {
                    // u64 * u64 always fits in u128
                    let product = u128::from(a) * u128::from(b);
                    totals.all = accumulate(totals.all, product)?;
                    if enabled {
                        totals.enabled = accumulate(totals.enabled, product)?;
                    }
                }
                Instruction::Do => enabled = true,
                Instruction::Dont => enabled = false,
            }
        }

        Ok(*self.totals.insert(totals))
    }
}

fn accumulate(total: u128, product: u128) -> Result<u128, SolveError> {
    total
        .checked_add(product)
        .ok_or_else(|| solve_failed(anyhow!("sum of products overflows u128")))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.totals()?.all.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.totals()?.enabled.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str =
        "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "161");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "48");
    }

    #[test]
    fn test_instruction_sequence() {
        let found: Vec<Instruction> = instructions("mul(1,2)do()don't()mul()do(3,4)mul(3,4)")
            .collect::<anyhow::Result<_>>()
            .unwrap();
        assert_eq!(
            found,
            vec![
                Instruction::Mul(1, 2),
                Instruction::Do,
                Instruction::Dont,
                Instruction::Mul(3, 4),
            ]
        );
    }

    #[test]
    fn test_toggle_spans_lines() {
        let mut shared = Solver::parse("mul(2,3)don't()\nmul(4,4)\ndo()mul(1,1)\n").unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "23");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "7");
    }

    #[test]
    fn test_products_beyond_u64() {
        let mut shared = Solver::parse("mul(4294967296,4294967296)don't()mul(3,3)").unwrap();
        assert_eq!(
            <Solver as PartSolver<1>>::solve(&mut shared).unwrap(),
            "18446744073709551625"
        );
        assert_eq!(
            <Solver as PartSolver<2>>::solve(&mut shared).unwrap(),
            "18446744073709551616"
        );

        let max = u64::MAX;
        let mut shared = Solver::parse(&format!("mul({max},{max})")).unwrap();
        assert_eq!(
            <Solver as PartSolver<1>>::solve(&mut shared).unwrap(),
            (u128::from(max) * u128::from(max)).to_string()
        );
    }

    #[test]
    fn test_total_overflow_is_an_error() {
        let max = u64::MAX;
        let mut shared = Solver::parse(&format!("mul({max},{max})mul({max},{max})")).unwrap();
        assert!(matches!(
            <Solver as PartSolver<1>>::solve(&mut shared),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_oversized_operand_fails() {
        assert!(Solver::parse("mul(99999999999999999999,2)").is_err());
    }
}
