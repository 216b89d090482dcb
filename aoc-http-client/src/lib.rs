//! AOC HTTP Client Library
//!
//! Blocking client for the Advent of Code private leaderboard JSON API.
//!
//! # Features
//!
//! - Typed leaderboard model deserialized with serde
//! - Session cookie sent as a sensitive header, temporary copies zeroized
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Redirects are never followed
//!
//! # Example
//!
//! ```no_run
//! use aoc_http_client::AocClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::new()?;
//!
//! // Your session cookie from adventofcode.com
//! let session = "your_session_cookie_here";
//!
//! let leaderboard = client.get_leaderboard(2024, 123456, session)?;
//! for member in leaderboard.ranked() {
//!     println!("{} {}", member.display_name(), member.local_score);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod leaderboard;

pub use client::{AocClient, AocClientBuilder};
pub use error::AocError;
pub use leaderboard::{DayCompletion, Leaderboard, Member, StarCompletion};
