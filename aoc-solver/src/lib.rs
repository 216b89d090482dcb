//! Advent of Code Solver Library
//!
//! A small, type-safe framework for Advent of Code solvers. Each puzzle is a
//! solver with its own input parsing and one answer per part ("star").
//!
//! # Overview
//!
//! This library provides:
//! - [`AocParser`], [`PartSolver`] and [`Solver`] traits for defining solvers
//! - The [`Star`] selector used by the command line to pick parts
//! - [`SolverInstance`] / [`DynSolver`] to run a parsed puzzle with timing
//! - A plugin registry so solvers register themselves at link time
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, ParseError, PartSolver, SolveError, Solver, Star};
//!
//! #[derive(aoc_solver::AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Numbers;
//!
//! impl AocParser for Numbers {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Numbers {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Numbers {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i64>().to_string())
//!     }
//! }
//!
//! let mut shared = Numbers::parse("2\n3\n4").unwrap();
//! let answers: Vec<String> = Star::All
//!     .parts()
//!     .map(|part| Numbers::solve_part(&mut shared, part).unwrap())
//!     .collect();
//! assert_eq!(answers, ["9", "24"]);
//! ```
//!
//! # Plugin System
//!
//! `#[derive(AutoRegisterSolver)]` submits a [`SolverPlugin`] through
//! `inventory`; [`RegistryBuilder::register_all_plugins`] collects them:
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2024, day = 1, tags = ["2024"])]
//! pub struct Solver;
//! ```

mod error;
mod instance;
mod registry;
mod solver;
mod star;

pub use error::{ParseError, RegistrationError, SolveError, SolverError, StarParseError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    RegisterableSolver, RegistryBuilder, SolverFactory, SolverInfo, SolverPlugin, SolverRegistry,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};
pub use star::Star;

// Re-export inventory for use by the derive macro
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
