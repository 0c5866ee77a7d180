// 📂 Snapshot Loading - Country collections from the API payload or CSV
//
// The upstream API returns either a bare array of country records or the same
// array wrapped in `{"data": [...]}`. CSV exports carry one country per row
// with the two scores as optional columns.

use crate::entities::{Country, Scores};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

// ============================================================================
// JSON
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    List(Vec<Country>),
    Envelope { data: Vec<Country> },
}

pub fn parse_json(content: &str) -> Result<Vec<Country>> {
    let payload: Payload =
        serde_json::from_str(content).context("Failed to parse country payload")?;

    Ok(match payload {
        Payload::List(countries) => countries,
        Payload::Envelope { data } => data,
    })
}

pub fn load_json(path: &Path) -> Result<Vec<Country>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot: {:?}", path))?;
    parse_json(&content).with_context(|| format!("Invalid snapshot: {:?}", path))
}

// ============================================================================
// CSV
// ============================================================================

/// `code,name,category_a_score,category_b_score`
#[derive(Debug, Deserialize)]
struct CsvRow {
    code: String,
    name: String,
    #[serde(default)]
    category_a_score: Option<String>,
    #[serde(default)]
    category_b_score: Option<String>,
}

impl CsvRow {
    fn into_country(self, line: usize) -> Country {
        let a = parse_score(self.category_a_score.as_deref());
        let b = parse_score(self.category_b_score.as_deref());

        let scores = match (a, b) {
            (Some(a), Some(b)) => Some(Scores::new(a, b)),
            (None, None) => None,
            _ => {
                tracing::warn!(
                    line,
                    code = %self.code,
                    "only one score present, country will not be ranked"
                );
                None
            }
        };

        Country {
            code: self.code,
            display_name: self.name,
            scores,
        }
    }
}

fn parse_score(raw: Option<&str>) -> Option<f64> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok()
}

pub fn load_csv(path: &Path) -> Result<Vec<Country>> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open CSV file: {:?}", path))?;

    let mut countries = Vec::new();
    for (i, result) in rdr.deserialize().enumerate() {
        // header is line 1
        let line = i + 2;
        let row: CsvRow = result.with_context(|| format!("Failed to read CSV line {}", line))?;
        countries.push(row.into_country(line));
    }

    Ok(countries)
}

// ============================================================================
// DISPATCH
// ============================================================================

/// `.csv` files load as CSV, everything else as JSON
pub fn load_snapshot(path: &Path) -> Result<Vec<Country>> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let countries = if is_csv { load_csv(path)? } else { load_json(path)? };

    tracing::info!(
        path = %path.display(),
        countries = countries.len(),
        "loaded snapshot"
    );
    Ok(countries)
}

// ============================================================================
// TESTS
// ============================================================================
