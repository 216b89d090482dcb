use crate::utils::{Point, invalid_format};
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashMap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 5, tags = ["2021", "geometry"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vent {
    from: Point,
    to: Point,
}

impl Vent {
    fn is_axis_aligned(&self) -> bool {
        self.from.x == self.to.x || self.from.y == self.to.y
    }

    fn is_diagonal(&self) -> bool {
        self.from.x.abs_diff(self.to.x) == self.from.y.abs_diff(self.to.y)
    }

    /// Every point from `from` to `to` inclusive
    fn points(&self) -> impl Iterator<Item = Point> {
        let step = self.from.step_towards(self.to);
        let to = self.to;
        std::iter::successors(Some(self.from), move |p| (*p != to).then(|| *p + step))
    }
}

fn parse_point(text: &str) -> anyhow::Result<Point> {
    let (x, y) = text
        .trim()
        .split_once(',')
        .ok_or_else(|| anyhow!("expected `x,y`, got {text:?}"))?;
    Ok(Point::new(x.trim().parse()?, y.trim().parse()?))
}

fn parse_vent(line: &str) -> anyhow::Result<Vent> {
    let (from, to) = line
        .split_once("->")
        .ok_or_else(|| anyhow!("expected `x1,y1 -> x2,y2`, got {line:?}"))?;
    let vent = Vent {
        from: parse_point(from)?,
        to: parse_point(to)?,
    };
    if !vent.is_axis_aligned() && !vent.is_diagonal() {
        return Err(anyhow!("line is neither straight nor at 45 degrees"));
    }
    Ok(vent)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vent>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| parse_vent(line).with_context(|| format!("line {}", idx + 1)))
            .collect::<anyhow::Result<_>>()
            .map_err(invalid_format)
    }
}

fn overlaps<'v>(vents: impl Iterator<Item = &'v Vent>) -> usize {
    let mut covered: HashMap<Point, u32> = HashMap::new();
    for point in vents.flat_map(Vent::points) {
        *covered.entry(point).or_default() += 1;
    }
    covered.values().filter(|count| **count >= 2).count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = overlaps(shared.iter().filter(|vent| vent.is_axis_aligned()));
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(overlaps(shared.iter()).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
0,9 -> 5,9
8,0 -> 0,8
9,4 -> 3,4
2,2 -> 2,1
7,0 -> 7,4
6,4 -> 2,0
0,9 -> 2,9
3,4 -> 1,4
0,0 -> 8,8
5,5 -> 8,2
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "5");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "12");
    }

    #[test]
    fn test_points_inclusive() {
        let vent = parse_vent("3,3 -> 1,1").unwrap();
        let points: Vec<Point> = vent.points().collect();
        assert_eq!(
            points,
            vec![Point::new(3, 3), Point::new(2, 2), Point::new(1, 1)]
        );

        let single = parse_vent("4,4 -> 4,4").unwrap();
        assert_eq!(single.points().count(), 1);
    }

    #[test]
    fn test_coordinates_at_the_i64_limits() {
        const MAX: i64 = i64::MAX;
        const MIN: i64 = i64::MIN;

        let diagonal = parse_vent(&format!("{},{MIN} -> {MAX},{}", MAX - 1, MIN + 1)).unwrap();
        assert_eq!(
            diagonal.points().collect::<Vec<_>>(),
            vec![Point::new(MAX - 1, MIN), Point::new(MAX, MIN + 1)]
        );

        let input = format!(
            "{},5 -> {MAX},5\n{MAX},3 -> {MAX},7\n{},{MIN} -> {MAX},{}\n",
            MAX - 2,
            MAX - 1,
            MIN + 1
        );
        let mut shared = Solver::parse(&input).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "1");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "1");

        // spans the whole range on both axes without being diagonal
        assert!(parse_vent(&format!("{MIN},0 -> {MAX},1")).is_err());
        assert!(parse_vent(&format!("{MIN},{MIN} -> {MAX},{MAX}")).unwrap().is_diagonal());
    }

    #[test]
    fn test_rejects_skewed_lines() {
        let err = Solver::parse("0,0 -> 2,2\n0,0 -> 1,3\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }
}
