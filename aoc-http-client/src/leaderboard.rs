//! Typed model of the private leaderboard JSON document

use serde::Deserialize;
use std::borrow::Cow;
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// A private leaderboard as served by `/<year>/leaderboard/private/view/<id>.json`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Leaderboard {
    /// Event year, as a string (`"2024"`)
    pub event: String,
    /// Member id of the leaderboard owner
    pub owner_id: u64,
    /// Members keyed by member id
    pub members: BTreeMap<u64, Member>,
}

impl Leaderboard {
    /// Members by local score, highest first; equal scores keep member id order
    pub fn ranked(&self) -> Vec<&Member> {
        let mut members: Vec<&Member> = self.members.values().collect();
        members.sort_by_key(|member| (Reverse(member.local_score), member.id));
        members
    }
}

/// One member of a private leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Member {
    pub id: u64,
    /// `None` for anonymous users
    #[serde(default)]
    pub name: Option<String>,
    pub local_score: u64,
    #[serde(default)]
    pub stars: u32,
    /// Completed days keyed by day number
    #[serde(default)]
    pub completion_day_level: BTreeMap<u8, DayCompletion>,
}

impl Member {
    /// The member's name, or the placeholder the website shows for anonymous users
    pub fn display_name(&self) -> Cow<'_, str> {
        match &self.name {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("(anonymous user #{})", self.id)),
        }
    }
}

/// Stars earned on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DayCompletion {
    #[serde(rename = "1")]
    pub first: StarCompletion,
    #[serde(rename = "2", default)]
    pub second: Option<StarCompletion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StarCompletion {
    /// Unix timestamp (seconds) at which the star was earned
    pub get_star_ts: i64,
    #[serde(default)]
    pub star_index: u64,
}
