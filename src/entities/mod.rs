// Entity Models
//
// A country is identified by its code (case-insensitive) and optionally
// carries the two base scores the leaderboard ranks on.

pub mod country;

pub use country::{normalize_code, Country, Scores};
