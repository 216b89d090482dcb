//! Leaderboard configuration file

use crate::error::CliError;
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use zeroize::Zeroizing;

/// Environment variable consulted when an entry has no `session`
pub const SESSION_ENV: &str = "AOC_SESSION";

/// Contents of `leaderboards.json`
#[derive(Debug, Deserialize)]
struct RawConfig {
    tz: String,
    leaderboards: BTreeMap<String, RawEntry>,
}

#[derive(Deserialize)]
struct RawEntry {
    id: u64,
    year: u16,
    #[serde(default, deserialize_with = "deserialize_session")]
    session: Option<Zeroizing<String>>,
}

impl fmt::Debug for RawEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawEntry")
            .field("id", &self.id)
            .field("year", &self.year)
            .field("session", &self.session.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn deserialize_session<'de, D>(deserializer: D) -> Result<Option<Zeroizing<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(Zeroizing::new))
}

/// One leaderboard to fetch, with its session resolved
pub struct Leaderboard {
    pub name: String,
    pub id: u64,
    pub year: u16,
    /// Session key (zeroized on drop)
    pub session: Zeroizing<String>,
}

impl Leaderboard {
    /// `leaderboard_<name>.txt`
    pub fn file_name(&self) -> String {
        format!("leaderboard_{}.txt", self.name)
    }
}

/// Resolved leaderboard configuration
pub struct Config {
    pub tz: Tz,
    /// Sorted by name
    pub leaderboards: Vec<Leaderboard>,
}

impl Config {
    /// Read and resolve the configuration at `path`
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let env_session = std::env::var(SESSION_ENV).ok().map(Zeroizing::new);
        Self::from_json(&text, env_session)
    }

    /// Parse configuration text, falling back to `env_session` for entries
    /// without their own session
    pub fn from_json(
        text: &str,
        env_session: Option<Zeroizing<String>>,
    ) -> Result<Self, CliError> {
        let raw: RawConfig = serde_json::from_str(text)
            .map_err(|e| CliError::Config(format!("invalid leaderboard config: {}", e)))?;

        let tz: Tz = raw
            .tz
            .parse()
            .map_err(|_| CliError::Config(format!("unknown timezone {:?}", raw.tz)))?;

        let leaderboards = raw
            .leaderboards
            .into_iter()
            .map(|(name, entry)| -> Result<Leaderboard, CliError> {
                let session = entry
                    .session
                    .or_else(|| env_session.clone())
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| {
                        CliError::Config(format!(
                            "no session for leaderboard {:?}: set `session` or {}",
                            name, SESSION_ENV
                        ))
                    })?;
                Ok(Leaderboard {
                    name,
                    id: entry.id,
                    year: entry.year,
                    session,
                })
            })
            .collect::<Result<Vec<_>, CliError>>()?;

        Ok(Config { tz, leaderboards })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"{
        "tz": "Europe/Rome",
        "leaderboards": {
            "work": {"id": 42, "year": 2024, "session": "cafe"},
            "friends": {"id": 7, "year": 2023}
        }
    }"#;

    #[test]
    fn test_entries_sorted_with_env_fallback() {
        let config = Config::from_json(CONFIG, Some(Zeroizing::new("beef".into()))).unwrap();

        assert_eq!(config.tz, chrono_tz::Europe::Rome);
        let names: Vec<&str> = config.leaderboards.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["friends", "work"]);

        let friends = &config.leaderboards[0];
        assert_eq!((friends.id, friends.year), (7, 2023));
        assert_eq!(friends.session.as_str(), "beef");
        assert_eq!(friends.file_name(), "leaderboard_friends.txt");

        assert_eq!(config.leaderboards[1].session.as_str(), "cafe");
    }

    #[test]
    fn test_missing_session_is_an_error() {
        let err = Config::from_json(CONFIG, None).err().unwrap();
        assert!(err.to_string().contains("friends"), "{err}");
    }

    #[test]
    fn test_unknown_timezone() {
        let text = r#"{"tz": "Mars/Olympus", "leaderboards": {}}"#;
        let err = Config::from_json(text, None).err().unwrap();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains("Mars/Olympus"), "{err}");
    }

    #[test]
    fn test_malformed_json() {
        assert!(Config::from_json("{\"tz\": \"UTC\"}", None).is_err());
    }

    #[test]
    fn test_debug_hides_session() {
        let raw: RawConfig = serde_json::from_str(CONFIG).unwrap();
        let debug = format!("{raw:?}");
        assert!(!debug.contains("cafe"), "{debug}");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leaderboards.json");
        std::fs::write(&path, r#"{"tz": "UTC", "leaderboards": {}}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.tz, chrono_tz::UTC);
        assert!(config.leaderboards.is_empty());

        assert!(Config::load(&dir.path().join("missing.json")).is_err());
    }
}
