use crate::utils::invalid_format;
use anyhow::{Context, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 10, tags = ["2022", "simulation"])]
pub struct Solver;

const SCREEN_WIDTH: usize = 40;
const FIRST_SAMPLE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instruction {
    Noop,
    Addx(i64),
}

impl Instruction {
    fn cycles(self) -> usize {
        match self {
            Instruction::Noop => 1,
            Instruction::Addx(_) => 2,
        }
    }
}

/// Value of the `X` register during each cycle, starting at cycle 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    during: Vec<i64>,
}

impl Trace {
    fn run(program: &[Instruction]) -> Self {
        let mut x = 1;
        let mut during = Vec::with_capacity(program.len() * 2);
        for instruction in program {
            during.extend(std::iter::repeat_n(x, instruction.cycles()));
            if let Instruction::Addx(value) = instruction {
                x += value;
            }
        }
        Self { during }
    }

    fn signal_strength(&self) -> i64 {
        self.during
            .iter()
            .enumerate()
            .skip(FIRST_SAMPLE - 1)
            .step_by(SCREEN_WIDTH)
            .map(|(i, x)| (i as i64 + 1) * x)
            .sum()
    }

    /// One character per cycle, every row starting on a new line
    fn render(&self) -> String {
        let mut screen = String::with_capacity(self.during.len() * 4);
        for (i, x) in self.during.iter().enumerate() {
            let column = (i % SCREEN_WIDTH) as i64;
            if column == 0 {
                screen.push('\n');
            }
            screen.push(if (column - x).abs() <= 1 { '█' } else { ' ' });
        }
        screen
    }
}

fn parse_instruction(line: &str) -> anyhow::Result<Instruction> {
    let mut words = line.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some("noop"), None, None) => Ok(Instruction::Noop),
        (Some("addx"), Some(value), None) => {
            Ok(Instruction::Addx(value.parse::<i64>().context("addx operand")?))
        }
        _ => bail!("unknown instruction {line:?}"),
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Trace;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let program = input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                parse_instruction(line).with_context(|| format!("line {}", idx + 1))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(invalid_format)?;
        Ok(Trace::run(&program))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.signal_strength().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.render())
    }
}
