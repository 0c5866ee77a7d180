// Country Leaderboard - Core Library
// Exposes all modules for use in the CLI, API server, and tests

pub mod entities;   // Country + optional Scores
pub mod ranking;    // Top-N, composite score, cross-category merge
pub mod source;     // Snapshot loading (JSON payload, CSV)
pub mod config;     // Labels, server address, default snapshot
pub mod display;    // Medal glyphs, ordinal labels, text output
pub mod report;     // Leaderboard + snapshot fingerprint
pub mod telemetry;  // tracing subscriber setup

#[cfg(feature = "server")]
pub mod api;        // axum router

// Re-export commonly used types
pub use entities::{normalize_code, Country, Scores};
pub use ranking::{
    composite_score, merge_placements, round_half_up, top_n,
    Badge, Category, Leaderboard, Placement, Position, RankedCountry, RankingEngine,
    CATEGORY_PRIORITY, TOP_N,
};
pub use source::{load_csv, load_json, load_snapshot, parse_json};
pub use config::{CategoryLabels, LeaderboardConfig, ServerConfig};
pub use report::{snapshot_fingerprint, LeaderboardReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
