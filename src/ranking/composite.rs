// Composite score: rounded mean of the two base metrics.
// Always derived from the current Scores, never stored on the country.

use crate::entities::Scores;

pub fn composite_score(scores: &Scores) -> f64 {
    round_half_up(scores.category_a_score / 2.0 + scores.category_b_score / 2.0)
}

/// Nearest integer, exact halves toward positive infinity (80.5 -> 81, -2.5 -> -2)
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
