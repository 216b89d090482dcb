//! Registry, plugin collection and instance behaviour

use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, RegistrationError,
    RegistryBuilder, SolveError, SolverError, register_solver,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 3, tags = ["words"])]
struct Words;

impl AocParser for Words {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let words: Vec<&str> = input.split_whitespace().collect();
        if words.is_empty() {
            return Err(ParseError::MissingData("no words".to_string()));
        }
        Ok(words)
    }
}

impl PartSolver<1> for Words {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for Words {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|w| w.len()).max().unwrap_or(0).to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2021, day = 7)]
struct Lines;

impl AocParser for Lines {
    type SharedData<'a> = usize;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.lines().count())
    }
}

impl PartSolver<1> for Lines {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.to_string())
    }
}

#[test]
fn test_manual_registration_and_solve() {
    let mut builder = RegistryBuilder::new();
    register_solver!(builder, Words, 2024, 3);
    let registry = builder.build();

    let mut solver = registry.create_solver(2024, 3, "tiny medium enormous").unwrap();
    assert_eq!(solver.year(), 2024);
    assert_eq!(solver.day(), 3);
    assert_eq!(solver.parts(), 2);
    assert_eq!(solver.solve(1).unwrap().answer, "3");
    assert_eq!(solver.solve(2).unwrap().answer, "8");
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());
}

#[test]
fn test_out_of_range_part_through_instance() {
    let mut builder = RegistryBuilder::new();
    register_solver!(builder, Lines, 2021, 7);
    let registry = builder.build();

    let mut solver = registry.create_solver(2021, 7, "a\nb").unwrap();
    assert!(matches!(solver.solve(2), Err(SolveError::PartOutOfRange(2))));
}

#[test]
fn test_missing_solver() {
    let registry = RegistryBuilder::new().build();
    assert!(registry.is_empty());

    match registry.create_solver(2024, 1, "") {
        Err(SolverError::NotFound(2024, 1)) => {}
        Err(other) => panic!("expected NotFound, got {other:?}"),
        Ok(_) => panic!("expected NotFound"),
    }
}

#[test]
fn test_parse_error_surfaces() {
    let mut builder = RegistryBuilder::new();
    register_solver!(builder, Words, 2024, 3);
    let registry = builder.build();

    match registry.create_solver(2024, 3, "   \n") {
        Err(SolverError::ParseError(ParseError::MissingData(_))) => {}
        Err(other) => panic!("expected MissingData, got {other:?}"),
        Ok(_) => panic!("expected a parse error"),
    }
}

#[test]
fn test_plugins_are_collected_and_sorted() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let solvers = registry.solvers();
    let keys: Vec<(u16, u8)> = solvers.iter().map(|info| (info.year, info.day)).collect();
    assert_eq!(keys, vec![(2021, 7), (2024, 3)]);
    assert_eq!(solvers[0].parts, 1);
    assert_eq!(solvers[1].tags, &["words"]);
}

#[test]
fn test_plugin_filter() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"words"))
        .unwrap()
        .build();

    assert_eq!(registry.len(), 1);
    assert!(registry.info(2024, 3).is_some());
    assert!(registry.info(2021, 7).is_none());
}

#[test]
fn test_duplicate_plugin_registration_rejected() {
    let result = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .register_all_plugins();

    assert!(matches!(
        result,
        Err(RegistrationError::DuplicateSolver(_, _))
    ));
}
