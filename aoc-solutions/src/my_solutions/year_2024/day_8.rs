use crate::utils::{Grid, Point, invalid_format};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use std::collections::{BTreeMap, HashSet};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 8, tags = ["2024", "grid"])]
pub struct Solver;

#[derive(Debug)]
pub struct Antennas {
    map: Grid<char>,
    by_frequency: BTreeMap<char, Vec<Point>>,
}

impl Antennas {
    fn pairs(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.by_frequency
            .values()
            .flat_map(|points| points.iter().copied().tuple_combinations())
    }

    /// Points from `from` outwards in steps of `step`, while on the map
    fn ray(&self, from: Point, step: Point) -> impl Iterator<Item = Point> + '_ {
        std::iter::successors(Some(from), move |p| Some(*p + step))
            .take_while(|p| self.map.contains(*p))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Antennas;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let map = Grid::parse(input, |_, c| Ok(c)).map_err(invalid_format)?;

        let mut by_frequency: BTreeMap<char, Vec<Point>> = BTreeMap::new();
        for (point, c) in map.iter().filter(|(_, c)| **c != '.') {
            by_frequency.entry(*c).or_default().push(point);
        }

        Ok(Antennas { map, by_frequency })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let antinodes: HashSet<Point> = shared
            .pairs()
            .flat_map(|(a, b)| {
                let d = b - a;
                [a - d, b + d]
            })
            .filter(|p| shared.map.contains(*p))
            .collect();
        Ok(antinodes.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let antennas = &*shared;
        let antinodes: HashSet<Point> = antennas
            .pairs()
            .flat_map(|(a, b)| {
                let d = b - a;
                antennas.ray(a, -d).chain(antennas.ray(b, d))
            })
            .collect();
        Ok(antinodes.len().to_string())
    }
}
