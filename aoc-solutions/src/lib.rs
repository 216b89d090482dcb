//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions are organized by year under [`my_solutions`]. Each one derives
//! `AutoRegisterSolver`, so linking this crate is enough to make it visible
//! to `RegistryBuilder::register_all_plugins`.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
