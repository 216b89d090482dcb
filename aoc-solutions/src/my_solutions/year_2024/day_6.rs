use crate::utils::{Grid, Point, invalid_format};
use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 6, tags = ["2024", "grid", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Obstacle,
}

/// Position and facing of the guard
type State = (Point, Point);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Moved(State),
    Left,
    /// Obstacles on all four sides
    Stuck,
}

#[derive(Debug)]
pub struct Lab {
    grid: Grid<Cell>,
    start: State,
}

impl Lab {
    fn step(&self, (position, mut facing): State) -> Step {
        for _ in 0..4 {
            let next = position + facing;
            match self.grid.get(next) {
                None => return Step::Left,
                Some(Cell::Obstacle) => facing = facing.turn_right(),
                Some(Cell::Empty) => return Step::Moved((next, facing)),
            }
        }
        Step::Stuck
    }

    /// Walks from `state` until the guard leaves, gets stuck or repeats a state
    fn loops_from(&self, mut state: State) -> bool {
        let mut seen = HashSet::new();
        loop {
            if !seen.insert(state) {
                return true;
            }
            match self.step(state) {
                Step::Moved(next) => state = next,
                Step::Left => return false,
                Step::Stuck => return true,
            }
        }
    }
}

/// Places an obstacle for as long as the guard value lives
struct ObstacleGuard<'a> {
    lab: &'a mut Lab,
    at: Point,
    previous: Cell,
}

impl<'a> ObstacleGuard<'a> {
    fn place(lab: &'a mut Lab, at: Point) -> Option<Self> {
        let cell = lab.grid.get_mut(at)?;
        let previous = std::mem::replace(cell, Cell::Obstacle);
        Some(Self { lab, at, previous })
    }

    fn lab(&self) -> &Lab {
        self.lab
    }
}

impl Drop for ObstacleGuard<'_> {
    fn drop(&mut self) {
        if let Some(cell) = self.lab.grid.get_mut(self.at) {
            *cell = self.previous;
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Lab;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut start = None;
        let grid = Grid::parse(input, |point, c| {
            let facing = match c {
                '.' => return Ok(Cell::Empty),
                '#' => return Ok(Cell::Obstacle),
                '^' => Point::UP,
                '>' => Point::RIGHT,
                'v' => Point::DOWN,
                '<' => Point::LEFT,
                other => bail!("unexpected character {other:?}"),
            };
            if start.replace((point, facing)).is_some() {
                bail!("more than one guard");
            }
            Ok(Cell::Empty)
        })
        .map_err(invalid_format)?;

        let start = start
            .ok_or_else(|| anyhow!("no guard on the map"))
            .map_err(invalid_format)?;
        Ok(Lab { grid, start })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut state = shared.start;
        let mut seen = HashSet::from([state]);
        let mut visited = HashSet::from([state.0]);

        while let Step::Moved(next) = shared.step(state) {
            if !seen.insert(next) {
                break;
            }
            visited.insert(next.0);
            state = next;
        }

        Ok(visited.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut state = shared.start;
        let mut seen = HashSet::from([state]);
        let mut visited = HashSet::from([state.0]);
        let mut blockers = 0usize;

        while let Step::Moved(next) = shared.step(state) {
            if visited.insert(next.0) {
                let guard = ObstacleGuard::place(shared, next.0);
                if guard.is_some_and(|guard| guard.lab().loops_from(state)) {
                    blockers += 1;
                }
            }
            if !seen.insert(next) {
                break;
            }
            state = next;
        }

        Ok(blockers.to_string())
    }
}
