//! AOC CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod config;
mod error;
mod harness;
mod leaderboard;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_http_client::AocClient;
use aoc_solver::{RegistryBuilder, SolverRegistry};
use clap::Parser;
use cli::{Args, Command, LeaderboardArgs, SolveArgs};
use config::Config;
use error::CliError;
use output::OutputFormatter;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Solve(args) => solve(args),
        Command::List { year } => list(year),
        Command::Leaderboard(args) => leaderboards(args),
    }
}

fn solve(args: SolveArgs) -> Result<(), CliError> {
    let input = harness::read_input(&args.input)?;
    let registry = build_registry(Some(args.year))?;

    let report = harness::run_solver(&registry, args.year, args.day, &input, args.star)?;
    OutputFormatter::new(args.timings).print_report(&report);
    Ok(())
}

fn list(year: Option<u16>) -> Result<(), CliError> {
    let registry = build_registry(year)?;
    if registry.is_empty() {
        println!("No solvers registered.");
    }
    for info in registry.solvers() {
        println!("{}", output::format_solver_info(&info));
    }
    Ok(())
}

fn leaderboards(args: LeaderboardArgs) -> Result<(), CliError> {
    let config = Config::load(&args.config)?;
    let client = AocClient::new()?;
    leaderboard::write_reports(&client, &config, &args.output_dir)?;
    Ok(())
}

/// Registry of all linked solvers, optionally restricted to one year
fn build_registry(year: Option<u16>) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = match year {
        None => builder.register_all_plugins()?,
        Some(year) => builder.register_solver_plugins(|plugin| plugin.year == year)?,
    };

    Ok(builder.build())
}
