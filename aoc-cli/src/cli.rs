//! CLI argument parsing using clap

use aoc_solver::Star;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers", version)]
pub struct Args {
    /// Log at debug level (trace with -vv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve one puzzle and print its stars
    Solve(SolveArgs),

    /// List registered solvers
    List {
        /// Only list solvers of this year
        #[arg(short, long)]
        year: Option<u16>,
    },

    /// Fetch private leaderboards and write each one to a text file
    Leaderboard(LeaderboardArgs),
}

#[derive(clap::Args, Debug)]
pub struct SolveArgs {
    /// Puzzle year
    #[arg(short, long, default_value_t = 2024)]
    pub year: u16,

    /// Puzzle day
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// Puzzle input file
    #[arg(short, long, default_value = "input")]
    pub input: PathBuf,

    /// Stars to solve: 0/all, 1/one or 2/two, optionally prefixed with `star.`
    #[arg(short, long, default_value_t = Star::All)]
    pub star: Star,

    /// Append parse and solve durations to each line
    #[arg(long)]
    pub timings: bool,
}

#[derive(clap::Args, Debug)]
pub struct LeaderboardArgs {
    /// JSON file with the timezone and the leaderboards to fetch
    #[arg(short, long, default_value = "leaderboards.json")]
    pub config: PathBuf,

    /// Directory receiving the `leaderboard_<name>.txt` files
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn solve_args(argv: &[&str]) -> SolveArgs {
        match Args::try_parse_from(argv.iter().copied()).unwrap().command {
            Command::Solve(args) => args,
            other => panic!("expected solve, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_solve_defaults() {
        let args = solve_args(&["aoc", "solve", "-d", "3"]);
        assert_eq!(args.year, 2024);
        assert_eq!(args.day, 3);
        assert_eq!(args.input, PathBuf::from("input"));
        assert_eq!(args.star, Star::All);
        assert!(!args.timings);
    }

    #[test]
    fn test_star_spellings() {
        for (value, expected) in [
            ("0", Star::All),
            ("1", Star::One),
            ("two", Star::Two),
            ("ONE", Star::One),
            ("star.all", Star::All),
            ("STAR.Two", Star::Two),
        ] {
            let args = solve_args(&["aoc", "solve", "-d", "1", "-s", value]);
            assert_eq!(args.star, expected, "{value}");
        }
    }

    #[test]
    fn test_invalid_arguments_rejected() {
        assert!(Args::try_parse_from(["aoc", "solve", "-d", "1", "-s", "3"]).is_err());
        assert!(Args::try_parse_from(["aoc", "solve", "-d", "1", "--star", "three"]).is_err());
        assert!(Args::try_parse_from(["aoc", "solve", "-d", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "solve"]).is_err());
    }

    #[test]
    fn test_leaderboard_defaults() {
        let args = Args::try_parse_from(["aoc", "leaderboard"]).unwrap();
        let Command::Leaderboard(args) = args.command else {
            panic!("expected leaderboard");
        };
        assert_eq!(args.config, PathBuf::from("leaderboards.json"));
        assert_eq!(args.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_verbose_is_global() {
        let args = Args::try_parse_from(["aoc", "list", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }
}
