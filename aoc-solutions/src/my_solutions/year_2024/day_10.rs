use crate::utils::{Grid, Point, invalid_format};
use anyhow::bail;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 10, tags = ["2024", "grid", "recursion"])]
pub struct Solver;

const TRAILHEAD: u8 = 0;
const SUMMIT: u8 = 9;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct TrailSummary {
    /// Sum over trailheads of distinct reachable summits
    score: usize,
    /// Sum over trailheads of distinct hiking trails
    rating: usize,
}

#[derive(Debug)]
pub struct TopoMap {
    /// `None` for impassable cells
    heights: Grid<Option<u8>>,
    summary: Option<TrailSummary>,
}

impl TopoMap {
    /// Pushes the summit at the end of every trail starting at `at`
    fn follow(&self, at: Point, height: u8, summits: &mut Vec<Point>) {
        if height == SUMMIT {
            summits.push(at);
            return;
        }
        for step in Point::ORTHOGONAL {
            let next = at + step;
            if self.heights.get(next) == Some(&Some(height + 1)) {
                self.follow(next, height + 1, summits);
            }
        }
    }

    fn summary(&mut self) -> TrailSummary {
        if let Some(summary) = self.summary {
            return summary;
        }

        let mut summary = TrailSummary::default();
        let mut summits = Vec::new();
        for (start, _) in self
            .heights
            .iter()
            .filter(|(_, height)| **height == Some(TRAILHEAD))
        {
            summits.clear();
            self.follow(start, TRAILHEAD, &mut summits);
            summary.rating += summits.len();
            summary.score += summits.iter().collect::<HashSet<_>>().len();
        }

        *self.summary.insert(summary)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = TopoMap;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let heights = Grid::parse(input, |_, c| match c {
            '.' => Ok(None),
            '0'..='9' => Ok(c.to_digit(10).map(|d| d as u8)),
            other => bail!("unexpected character {other:?}"),
        })
        .map_err(invalid_format)?;

        Ok(TopoMap {
            heights,
            summary: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.summary().score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.summary().rating.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "36");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "81");
    }

    #[test]
    fn test_impassable_cells() {
        let input = "\
...0...
...1...
...2...
6543456
7.....7
8.....8
9.....9
";
        let mut shared = Solver::parse(input).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "2");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "2");
    }

    #[test]
    fn test_many_trails_to_one_summit() {
        let input = "\
.....0.
..4321.
..5..2.
..6543.
..7..4.
..8..5.
..9876.
";
        let mut shared = Solver::parse(input).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "1");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "3");
    }

    #[test]
    fn test_rejects_unknown_cells() {
        assert!(Solver::parse("01\n2x\n").is_err());
    }
}
