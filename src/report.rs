// 📋 Leaderboard Report - A leaderboard plus where it came from
//
// The leaderboard itself is a pure function of the snapshot. The report adds
// a fingerprint of that snapshot so two reports can be checked for having
// ranked the same data, and the time it was produced.

use crate::config::CategoryLabels;
use crate::entities::Country;
use crate::ranking::{Leaderboard, RankingEngine};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardReport {
    pub generated_at: DateTime<Utc>,

    /// SHA-256 of the snapshot as ranked (order-sensitive)
    pub snapshot_fingerprint: String,

    pub total_countries: usize,
    pub labels: CategoryLabels,
    pub leaderboard: Leaderboard,
}

impl LeaderboardReport {
    pub fn build(
        engine: &RankingEngine,
        countries: &[Country],
        labels: &CategoryLabels,
    ) -> Result<Self> {
        Ok(LeaderboardReport {
            generated_at: Utc::now(),
            snapshot_fingerprint: snapshot_fingerprint(countries)?,
            total_countries: countries.len(),
            labels: labels.clone(),
            leaderboard: engine.rank(countries),
        })
    }
}

/// Input order is part of the fingerprint because it breaks ties
pub fn snapshot_fingerprint(countries: &[Country]) -> Result<String> {
    let canonical = serde_json::to_vec(countries).context("Failed to serialize snapshot")?;
    let mut hasher = Sha256::new();
    hasher.update(&canonical);
    Ok(format!("{:x}", hasher.finalize()))
}
