// 🏅 Display helpers - Medal glyphs, ordinal labels, plain-text leaderboard
//
// Used by the CLI. Anything richer (cards, podiums) belongs to the caller.

use crate::config::CategoryLabels;
use crate::ranking::{Badge, Category, Leaderboard, Placement, RankedCountry};
use std::fmt::Write;

/// e.g. "🥇 #1 Overall"
pub fn badge_label(badge: &Badge, labels: &CategoryLabels) -> String {
    format!(
        "{} {} {}",
        badge.position.medal(),
        badge.position.ordinal_label(),
        labels.label(badge.category)
    )
}

/// Scores print without a fractional part when they are whole numbers
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        format!("{:.2}", score)
    }
}

pub fn format_placements(category: Category, placements: &[Placement], labels: &CategoryLabels) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", labels.label(category));

    if placements.is_empty() {
        let _ = writeln!(out, "  (no ranked countries)");
        return out;
    }

    for placement in placements {
        let _ = writeln!(
            out,
            "  {} {:<3} {:<4} {:<28} {:>6}",
            placement.position.medal(),
            placement.position.ordinal_label(),
            placement.code,
            placement.display_name,
            format_score(placement.score)
        );
    }
    out
}

pub fn format_ranked(ranked: &RankedCountry, labels: &CategoryLabels) -> String {
    let badges: Vec<String> = ranked
        .badges
        .iter()
        .map(|badge| badge_label(badge, labels))
        .collect();

    format!(
        "{:<4} {:<28} {}",
        ranked.country.code,
        ranked.country.display_name,
        badges.join(", ")
    )
}

/// Three top lists followed by the merged badge list
pub fn format_leaderboard(board: &Leaderboard, labels: &CategoryLabels) -> String {
    let mut out = String::new();

    for category in crate::ranking::CATEGORY_PRIORITY {
        out.push_str(&format_placements(category, board.top(category), labels));
        out.push('\n');
    }

    let _ = writeln!(out, "Badges");
    if board.merged.is_empty() {
        let _ = writeln!(out, "  (no ranked countries)");
    }
    for ranked in &board.merged {
        let _ = writeln!(out, "  {}", format_ranked(ranked, labels));
    }

    let _ = writeln!(
        out,
        "\n{} ranked, {} without scores",
        board.eligible, board.excluded
    );
    out
}
