use crate::utils::{Grid, Point, invalid_format};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 4, tags = ["2024", "grid"])]
pub struct Solver;

const WORD: [char; 4] = ['X', 'M', 'A', 'S'];

/// Every straight direction; a reversed match is a forward match read the other way
const DIRECTIONS: [Point; 8] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(1, 1),
    Point::new(-1, -1),
    Point::new(-1, 1),
    Point::new(1, -1),
];

impl AocParser for Solver {
    type SharedData<'a> = Grid<char>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse(input, |_, c| Ok(c)).map_err(invalid_format)
    }
}

fn spells_word(grid: &Grid<char>, start: Point, direction: Point) -> bool {
    WORD.iter()
        .enumerate()
        .all(|(i, expected)| grid.get(start + direction * i as i64) == Some(expected))
}

fn is_mas(grid: &Grid<char>, a: Point, b: Point) -> bool {
    matches!(
        (grid.get(a), grid.get(b)),
        (Some('M'), Some('S')) | (Some('S'), Some('M'))
    )
}

fn is_cross(grid: &Grid<char>, center: Point) -> bool {
    grid.get(center) == Some(&'A')
        && is_mas(grid, center + Point::new(-1, -1), center + Point::new(1, 1))
        && is_mas(grid, center + Point::new(1, -1), center + Point::new(-1, 1))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared
            .iter()
            .filter(|(_, c)| **c == WORD[0])
            .map(|(start, _)| {
                DIRECTIONS
                    .iter()
                    .filter(|direction| spells_word(shared, start, **direction))
                    .count()
            })
            .sum::<usize>();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared
            .points()
            .filter(|center| is_cross(shared, *center))
            .count();
        Ok(count.to_string())
    }
}
