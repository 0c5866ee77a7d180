// 🌍 Country Entity - The subject being ranked
//
// A country always has identity (code) and a display name. Scores are optional:
// the upstream API omits the nested object for countries that have not been
// rated yet, and those countries stay in the collection but never rank.

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// SCORES
// ============================================================================

/// The two base metrics of a country. Both are present or neither is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    /// Primary metric (category A), nominally 0-100
    pub category_a_score: f64,

    /// Secondary metric (category B), nominally 0-100
    pub category_b_score: f64,
}

impl Scores {
    pub fn new(category_a_score: f64, category_b_score: f64) -> Self {
        Scores {
            category_a_score,
            category_b_score,
        }
    }

    /// Both values are real numbers. Range is not enforced.
    pub fn is_finite(&self) -> bool {
        self.category_a_score.is_finite() && self.category_b_score.is_finite()
    }
}

// ============================================================================
// COUNTRY ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Unique identifier, compared case-insensitively (e.g. "PT", "ae")
    pub code: String,

    /// Human-readable name (e.g. "Portugal")
    #[serde(alias = "name")]
    pub display_name: String,

    /// Missing or malformed score data deserializes to None
    #[serde(default, deserialize_with = "deserialize_scores")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<Scores>,
}

impl Country {
    /// Country with both base scores
    pub fn scored(code: &str, display_name: &str, category_a_score: f64, category_b_score: f64) -> Self {
        Country {
            code: code.to_string(),
            display_name: display_name.to_string(),
            scores: Some(Scores::new(category_a_score, category_b_score)),
        }
    }

    /// Country without score data
    pub fn unscored(code: &str, display_name: &str) -> Self {
        Country {
            code: code.to_string(),
            display_name: display_name.to_string(),
            scores: None,
        }
    }

    /// Scores usable for ranking, or None when the country must be skipped
    pub fn ranking_scores(&self) -> Option<&Scores> {
        match &self.scores {
            Some(scores) if scores.is_finite() => Some(scores),
            _ => None,
        }
    }

    pub fn is_rankable(&self) -> bool {
        self.ranking_scores().is_some()
    }

    /// Case-insensitive uniqueness key
    pub fn code_key(&self) -> String {
        normalize_code(&self.code)
    }
}

pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

// ============================================================================
// LENIENT SCORE PARSING
// ============================================================================

/// Accepts whatever the API sends under `scores`. Anything other than an
/// object with two numeric fields becomes None instead of failing the payload.
fn deserialize_scores<'de, D>(deserializer: D) -> Result<Option<Scores>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(scores_from_value))
}

fn scores_from_value(value: &serde_json::Value) -> Option<Scores> {
    let object = value.as_object()?;
    let a = object.get("categoryAScore")?.as_f64()?;
    let b = object.get("categoryBScore")?.as_f64()?;
    Some(Scores::new(a, b))
}

// ============================================================================
// TESTS
// ============================================================================
