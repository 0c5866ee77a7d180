// Top-N selection for a single category.

use super::{Category, Placement, Position};
use crate::entities::Country;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Top 3 countries for `category`, best first.
///
/// Countries without valid scores are skipped. Codes are unique per list:
/// when several scored records share a code (case-insensitively) only the
/// first in input order ranks. Equal scores keep their input order. Returns
/// fewer than 3 rows when fewer countries are eligible.
pub fn top_n(countries: &[Country], category: Category) -> Vec<Placement> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut eligible: Vec<(usize, &Country, f64)> = countries
        .iter()
        .enumerate()
        .filter_map(|(index, country)| {
            let scores = country.ranking_scores()?;
            if !seen.insert(country.code_key()) {
                return None;
            }
            Some((index, country, category.score(scores)))
        })
        .collect();

    // sort_by is stable
    eligible.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(Ordering::Equal));

    eligible
        .into_iter()
        .zip(Position::ALL)
        .map(|((input_index, country, score), position)| Placement {
            position,
            code: country.code.clone(),
            display_name: country.display_name.clone(),
            score,
            input_index,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(placements: &[Placement]) -> Vec<&str> {
        placements.iter().map(|p| p.code.as_str()).collect()
    }

    fn scenario() -> Vec<Country> {
        vec![
            Country::scored("X", "Xland", 90.0, 70.0),
            Country::scored("Y", "Yland", 60.0, 95.0),
            Country::scored("Z", "Zland", 75.0, 80.0),
            Country::unscored("W", "Wland"),
        ]
    }

    #[test]
    fn test_top_n_per_category() {
        let countries = scenario();

        let composite = top_n(&countries, Category::Composite);
        assert_eq!(codes(&composite), vec!["X", "Y", "Z"]);
        assert_eq!(
            composite.iter().map(|p| p.score).collect::<Vec<_>>(),
            vec![80.0, 78.0, 78.0]
        );

        assert_eq!(codes(&top_n(&countries, Category::A)), vec!["X", "Z", "Y"]);
        assert_eq!(codes(&top_n(&countries, Category::B)), vec!["Y", "Z", "X"]);
    }

    #[test]
    fn test_positions_assigned_in_order() {
        let placements = top_n(&scenario(), Category::A);
        assert_eq!(
            placements.iter().map(|p| p.position).collect::<Vec<_>>(),
            vec![Position::Gold, Position::Silver, Position::Bronze]
        );
    }

    #[test]
    fn test_truncates_to_three() {
        let countries: Vec<Country> = (0..6)
            .map(|i| Country::scored(&format!("C{}", i), "Country", i as f64 * 10.0, 0.0))
            .collect();

        let placements = top_n(&countries, Category::A);
        assert_eq!(codes(&placements), vec!["C5", "C4", "C3"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let countries = vec![
            Country::scored("FIRST", "First", 50.0, 10.0),
            Country::scored("SECOND", "Second", 50.0, 20.0),
            Country::scored("THIRD", "Third", 50.0, 30.0),
            Country::scored("FOURTH", "Fourth", 50.0, 40.0),
        ];

        let placements = top_n(&countries, Category::A);
        assert_eq!(codes(&placements), vec!["FIRST", "SECOND", "THIRD"]);
    }

    #[test]
    fn test_fewer_than_three_eligible() {
        let countries = vec![
            Country::unscored("AA", "Aa"),
            Country::scored("BB", "Bb", 10.0, 10.0),
            Country::unscored("CC", "Cc"),
        ];

        let placements = top_n(&countries, Category::B);
        assert_eq!(codes(&placements), vec!["BB"]);
        assert_eq!(placements[0].input_index, 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(top_n(&[], Category::Composite).is_empty());
        assert!(top_n(&[Country::unscored("W", "Wland")], Category::A).is_empty());
    }

    #[test]
    fn test_non_finite_scores_excluded() {
        let countries = vec![
            Country::scored("NAN", "NaN", f64::NAN, 99.0),
            Country::scored("INF", "Inf", f64::INFINITY, 99.0),
            Country::scored("OK", "Ok", 1.0, 1.0),
        ];

        assert_eq!(codes(&top_n(&countries, Category::B)), vec!["OK"]);
    }

    #[test]
    fn test_duplicate_codes_rank_once() {
        let countries = vec![
            Country::unscored("pt", "Portugal (pending)"),
            Country::scored("pt", "Portugal", 80.0, 80.0),
            Country::scored("PT", "Portugal (dup)", 90.0, 90.0),
            Country::scored("ES", "Spain", 70.0, 70.0),
        ];

        for category in [Category::Composite, Category::A, Category::B] {
            let placements = top_n(&countries, category);
            assert_eq!(codes(&placements), vec!["pt", "ES"]);
            assert_eq!(placements[0].input_index, 1);
        }
    }

    #[test]
    fn test_source_not_mutated() {
        let countries = scenario();
        let before = countries.clone();
        let _ = top_n(&countries, Category::Composite);
        assert_eq!(countries, before);
    }
}
