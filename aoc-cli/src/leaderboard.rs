//! Private leaderboard reports

use crate::config::Config;
use crate::error::CliError;
use aoc_http_client::{AocClient, Leaderboard, Member};
use chrono::{DateTime, SecondsFormat, TimeDelta};
use chrono_tz::Tz;
use std::path::{Path, PathBuf};

/// Fetch every configured leaderboard in name order and write its report to
/// `output_dir`, overwriting existing files
///
/// The first failure aborts the run.
pub fn write_reports(
    client: &AocClient,
    config: &Config,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, CliError> {
    let mut written = Vec::with_capacity(config.leaderboards.len());

    for entry in &config.leaderboards {
        let file_name = entry.file_name();
        println!("Retrieving {} and saving it as {}", entry.name, file_name);
        tracing::info!(name = %entry.name, id = entry.id, year = entry.year, "fetching leaderboard");

        let leaderboard = client.get_leaderboard(entry.year, entry.id, &entry.session)?;
        let report = render_report(&leaderboard, config.tz);

        let path = output_dir.join(&file_name);
        std::fs::write(&path, report).map_err(|source| CliError::Output {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }

    Ok(written)
}

/// Text report: members by score, then their completed days
pub fn render_report(leaderboard: &Leaderboard, tz: Tz) -> String {
    let mut output = String::new();
    for member in leaderboard.ranked() {
        render_member(&mut output, member, tz);
    }
    output
}

fn render_member(output: &mut String, member: &Member, tz: Tz) {
    output.push_str(&format!(
        "👤 {} 💯 {}\n",
        member.display_name(),
        member.local_score
    ));

    for (day, stars) in &member.completion_day_level {
        let first = stars.first.get_star_ts;
        output.push_str(&format!("    Day {}: ⭐ {}", day, format_timestamp(first, tz)));

        if let Some(second) = stars.second {
            let second = second.get_star_ts;
            output.push_str(&format!(
                " ⭐⭐ {} ⏲ {}",
                format_timestamp(second, tz),
                format_elapsed(TimeDelta::seconds(second - first))
            ));
        }
        output.push('\n');
    }
}

/// RFC 3339 with whole seconds and the offset of `tz`
pub fn format_timestamp(unix_seconds: i64, tz: Tz) -> String {
    match DateTime::from_timestamp(unix_seconds, 0) {
        Some(utc) => utc
            .with_timezone(&tz)
            .to_rfc3339_opts(SecondsFormat::Secs, false),
        None => unix_seconds.to_string(),
    }
}

/// `H:MM:SS`, prefixed by `N day(s), ` once at least a day has passed
///
/// Days are floored, so a negative span reads `-1 day, 23:59:55`.
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let total = elapsed.num_seconds();
    let days = total.div_euclid(86_400);
    let seconds = total.rem_euclid(86_400);
    let clock = format!(
        "{}:{:02}:{:02}",
        seconds / 3600,
        seconds % 3600 / 60,
        seconds % 60
    );

    match days {
        0 => clock,
        1 | -1 => format!("{} day, {}", days, clock),
        n => format!("{} days, {}", n, clock),
    }
}
