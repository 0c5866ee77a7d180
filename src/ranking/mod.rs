// 🏆 Ranking Engine - Multi-category leaderboard with badge assignment
//
// Every country with valid scores is ranked three times (Composite, A, B).
// The three top-3 lists are then merged into one list of unique countries,
// each carrying every badge it earned.

pub mod composite;
pub mod engine;
pub mod merge;
pub mod top_n;

use crate::entities::{Country, Scores};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use composite::{composite_score, round_half_up};
pub use engine::{Leaderboard, RankingEngine};
pub use merge::merge_placements;
pub use top_n::top_n;

/// Number of places awarded per category (gold, silver, bronze)
pub const TOP_N: usize = 3;

/// Category evaluation order.
///
/// Drives both badge accumulation order and merged output order: Composite
/// places first, then A-only newcomers, then B-only newcomers.
pub const CATEGORY_PRIORITY: [Category; 3] = [Category::Composite, Category::A, Category::B];

// ============================================================================
// CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Rounded mean of A and B
    Composite,

    /// Primary metric
    A,

    /// Secondary metric
    B,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Composite => "Composite",
            Category::A => "A",
            Category::B => "B",
        }
    }

    /// Score used to rank within this category
    pub fn score(&self, scores: &Scores) -> f64 {
        match self {
            Category::Composite => composite_score(scores),
            Category::A => scores.category_a_score,
            Category::B => scores.category_b_score,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "composite" | "overall" => Ok(Category::Composite),
            "a" => Ok(Category::A),
            "b" => Ok(Category::B),
            other => Err(format!("unknown category '{}' (use composite|a|b)", other)),
        }
    }
}

// ============================================================================
// POSITION
// ============================================================================

/// Place within a category's top 3. Serialized as its 0-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Position {
    Gold,
    Silver,
    Bronze,
}

impl Position {
    pub const ALL: [Position; TOP_N] = [Position::Gold, Position::Silver, Position::Bronze];

    /// 0-based rank
    pub fn index(&self) -> usize {
        match self {
            Position::Gold => 0,
            Position::Silver => 1,
            Position::Bronze => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Position> {
        Position::ALL.get(index).copied()
    }

    pub fn medal(&self) -> &'static str {
        match self {
            Position::Gold => "🥇",
            Position::Silver => "🥈",
            Position::Bronze => "🥉",
        }
    }

    /// 1-based label, e.g. "#1"
    pub fn ordinal_label(&self) -> String {
        format!("#{}", self.index() + 1)
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> u8 {
        position.index() as u8
    }
}

impl TryFrom<u8> for Position {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Position::from_index(value as usize)
            .ok_or_else(|| format!("position {} outside top {}", value, TOP_N))
    }
}

// ============================================================================
// BADGE
// ============================================================================

/// An entity placed at `position` within `category`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Badge {
    pub category: Category,
    pub position: Position,
}

impl Badge {
    pub fn new(category: Category, position: Position) -> Self {
        Badge { category, position }
    }
}

// ============================================================================
// RANKED VIEWS
// ============================================================================

/// One row of a per-category top-3 list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub position: Position,
    pub code: String,
    pub display_name: String,

    /// Score for this placement's category (derived for Composite)
    pub score: f64,

    /// Index of the country in the input collection
    #[serde(skip)]
    pub input_index: usize,
}

/// A country plus every badge it earned, as produced by the merge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCountry {
    #[serde(flatten)]
    pub country: Country,
    pub badges: Vec<Badge>,
}

impl RankedCountry {
    pub fn code(&self) -> &str {
        &self.country.code
    }

    pub fn badge_for(&self, category: Category) -> Option<&Badge> {
        self.badges.iter().find(|b| b.category == category)
    }
}

// ============================================================================
// TESTS
// ============================================================================
