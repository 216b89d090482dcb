//! Output formatting for solver results

use crate::harness::SolveReport;
use aoc_solver::SolverInfo;
use chrono::TimeDelta;

/// Output formatter for solver results
pub struct OutputFormatter {
    timings: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(timings: bool) -> Self {
        Self { timings }
    }

    /// `Star <n>: <answer>` per solved part, in part order
    ///
    /// With timings the first line also carries the parse duration.
    pub fn star_lines(&self, report: &SolveReport) -> Vec<String> {
        report
            .parts
            .iter()
            .enumerate()
            .map(|(i, (part, result))| {
                let line = format!("Star {}: {}", part, result.answer);
                if !self.timings {
                    return line;
                }

                let parse_timing = (i == 0)
                    .then(|| format!("parse: {}, ", format_duration(report.parse)))
                    .unwrap_or_default();
                format!(
                    "{} ({}solve: {})",
                    line,
                    parse_timing,
                    format_duration(result.duration())
                )
            })
            .collect()
    }

    /// Print every star line to stdout
    pub fn print_report(&self, report: &SolveReport) {
        for line in self.star_lines(report) {
            println!("{}", line);
        }
    }
}

/// `<year>/<day:02> (<parts> parts) [tags]`
pub fn format_solver_info(info: &SolverInfo) -> String {
    format!(
        "{}/{:02} ({} parts) [{}]",
        info.year,
        info.day,
        info.parts,
        info.tags.join(", ")
    )
}

/// Format a TimeDelta for display
pub fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
