// Ranking engine facade: one call, every view the leaderboard needs.

use super::{merge_placements, top_n, Category, Placement, RankedCountry, CATEGORY_PRIORITY};
use crate::entities::Country;
use serde::Serialize;

// ============================================================================
// LEADERBOARD
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leaderboard {
    /// Top 3 by composite score
    pub composite: Vec<Placement>,

    /// Top 3 by category A score
    pub a: Vec<Placement>,

    /// Top 3 by category B score
    pub b: Vec<Placement>,

    /// Unique countries across the three lists, with badges
    pub merged: Vec<RankedCountry>,

    /// Countries with valid scores
    pub eligible: usize,

    /// Countries skipped for missing or malformed scores
    pub excluded: usize,
}

impl Leaderboard {
    pub fn top(&self, category: Category) -> &[Placement] {
        match category {
            Category::Composite => &self.composite,
            Category::A => &self.a,
            Category::B => &self.b,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.merged.is_empty()
    }
}

// ============================================================================
// RANKING ENGINE
// ============================================================================

/// Stateless; every call ranks the collection it is given from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankingEngine;

impl RankingEngine {
    pub fn new() -> Self {
        RankingEngine
    }

    /// Category order used for both badge accumulation and merge output
    pub fn priority(&self) -> &'static [Category] {
        &CATEGORY_PRIORITY
    }

    pub fn top_n(&self, countries: &[Country], category: Category) -> Vec<Placement> {
        top_n(countries, category)
    }

    pub fn rank(&self, countries: &[Country]) -> Leaderboard {
        let lists: Vec<(Category, Vec<Placement>)> = self
            .priority()
            .iter()
            .map(|category| (*category, top_n(countries, *category)))
            .collect();

        let merged = merge_placements(countries, &lists);
        let eligible = countries.iter().filter(|c| c.is_rankable()).count();

        tracing::debug!(
            total = countries.len(),
            eligible,
            merged = merged.len(),
            "ranked countries"
        );

        let mut composite = Vec::new();
        let mut a = Vec::new();
        let mut b = Vec::new();
        for (category, placements) in lists {
            match category {
                Category::Composite => composite = placements,
                Category::A => a = placements,
                Category::B => b = placements,
            }
        }

        Leaderboard {
            composite,
            a,
            b,
            merged,
            eligible,
            excluded: countries.len() - eligible,
        }
    }
}
