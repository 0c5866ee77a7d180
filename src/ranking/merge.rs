// Cross-category merge: one entry per country, all badges attached.

use super::{Badge, Category, Placement, RankedCountry};
use crate::entities::{normalize_code, Country};
use std::collections::{HashMap, HashSet};

/// Merge per-category top lists into a deduplicated, badge-annotated list.
///
/// `lists` must be in category priority order. Badges are accumulated over
/// every list before anything is appended, so a country placed by the first
/// list already carries the badges it earned in later ones. Output order is
/// first appearance across `lists`.
///
/// `countries` is the collection the placements were computed from.
pub fn merge_placements(
    countries: &[Country],
    lists: &[(Category, Vec<Placement>)],
) -> Vec<RankedCountry> {
    // Pass 1: accumulate badges per code
    let mut badges: HashMap<String, Vec<Badge>> = HashMap::new();
    for (category, placements) in lists {
        for placement in placements {
            badges
                .entry(normalize_code(&placement.code))
                .or_default()
                .push(Badge::new(*category, placement.position));
        }
    }

    // Pass 2: append in first-seen order
    let mut placed: HashSet<String> = HashSet::new();
    let mut merged = Vec::new();
    for (_, placements) in lists {
        for placement in placements {
            let key = normalize_code(&placement.code);
            if placed.contains(&key) {
                continue;
            }
            let Some(country) = countries.get(placement.input_index) else {
                continue;
            };
            merged.push(RankedCountry {
                country: country.clone(),
                badges: badges.remove(&key).unwrap_or_default(),
            });
            placed.insert(key);
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::{top_n, Position, CATEGORY_PRIORITY};

    fn lists_for(countries: &[Country]) -> Vec<(Category, Vec<Placement>)> {
        CATEGORY_PRIORITY
            .iter()
            .map(|category| (*category, top_n(countries, *category)))
            .collect()
    }

    fn badge(category: Category, position: Position) -> Badge {
        Badge::new(category, position)
    }

    #[test]
    fn test_scenario_merge() {
        let countries = vec![
            Country::scored("X", "Xland", 90.0, 70.0),
            Country::scored("Y", "Yland", 60.0, 95.0),
            Country::scored("Z", "Zland", 75.0, 80.0),
            Country::unscored("W", "Wland"),
        ];

        let merged = merge_placements(&countries, &lists_for(&countries));

        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].code(), "X");
        assert_eq!(
            merged[0].badges,
            vec![
                badge(Category::Composite, Position::Gold),
                badge(Category::A, Position::Gold),
                badge(Category::B, Position::Bronze),
            ]
        );
        assert_eq!(merged[1].code(), "Y");
        assert_eq!(
            merged[1].badges,
            vec![
                badge(Category::Composite, Position::Silver),
                badge(Category::A, Position::Bronze),
                badge(Category::B, Position::Gold),
            ]
        );
        assert_eq!(merged[2].code(), "Z");
        assert_eq!(
            merged[2].badges,
            vec![
                badge(Category::Composite, Position::Bronze),
                badge(Category::A, Position::Silver),
                badge(Category::B, Position::Silver),
            ]
        );
        assert!(merged.iter().all(|r| r.code() != "W"));
    }

    #[test]
    fn test_newcomers_follow_priority() {
        // A-only and B-only specialists behind a balanced top three
        let countries = vec![
            Country::scored("BAL1", "Balanced 1", 80.0, 80.0),
            Country::scored("BAL2", "Balanced 2", 79.0, 79.0),
            Country::scored("BAL3", "Balanced 3", 78.0, 78.0),
            Country::scored("BONLY", "B specialist", 0.0, 100.0),
            Country::scored("AONLY", "A specialist", 100.0, 0.0),
        ];

        let merged = merge_placements(&countries, &lists_for(&countries));
        let codes: Vec<&str> = merged.iter().map(|r| r.code()).collect();

        assert_eq!(codes, vec!["BAL1", "BAL2", "BAL3", "AONLY", "BONLY"]);
        assert_eq!(merged[3].badges, vec![badge(Category::A, Position::Gold)]);
        assert_eq!(merged[4].badges, vec![badge(Category::B, Position::Gold)]);
        // BAL3 lost its A and B bronze to the specialists
        assert_eq!(
            merged[2].badges,
            vec![badge(Category::Composite, Position::Bronze)]
        );
    }

    #[test]
    fn test_max_nine_entries_without_overlap() {
        // Three disjoint winners per category
        let countries = vec![
            Country::scored("A1", "A1", 100.0, -300.0),
            Country::scored("A2", "A2", 99.0, -300.0),
            Country::scored("A3", "A3", 98.0, -300.0),
            Country::scored("B1", "B1", -300.0, 100.0),
            Country::scored("B2", "B2", -300.0, 99.0),
            Country::scored("B3", "B3", -300.0, 98.0),
            Country::scored("C1", "C1", 50.0, 50.0),
            Country::scored("C2", "C2", 49.0, 49.0),
            Country::scored("C3", "C3", 48.0, 48.0),
        ];

        let merged = merge_placements(&countries, &lists_for(&countries));
        let codes: Vec<&str> = merged.iter().map(|r| r.code()).collect();

        assert_eq!(
            codes,
            vec!["C1", "C2", "C3", "A1", "A2", "A3", "B1", "B2", "B3"]
        );
        assert!(merged.iter().all(|r| r.badges.len() == 1));
    }

    #[test]
    fn test_codes_deduplicated_case_insensitively() {
        let countries = vec![Country::scored("pt", "Portugal", 90.0, 90.0)];
        let mut lists = lists_for(&countries);
        // Upstream sent a differently-cased code in one list
        lists[1].1[0].code = "PT".to_string();

        let merged = merge_placements(&countries, &lists);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].badges.len(), 3);
    }

    #[test]
    fn test_case_variant_records_earn_one_badge_per_category() {
        let countries = vec![
            Country::scored("pt", "Portugal", 90.0, 90.0),
            Country::scored("PT", "Portugal", 80.0, 80.0),
        ];

        let merged = merge_placements(&countries, &lists_for(&countries));

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].code(), "pt");
        assert_eq!(
            merged[0].badges,
            vec![
                badge(Category::Composite, Position::Gold),
                badge(Category::A, Position::Gold),
                badge(Category::B, Position::Gold),
            ]
        );
    }

    #[test]
    fn test_empty_lists() {
        let merged = merge_placements(&[], &lists_for(&[]));
        assert!(merged.is_empty());
    }

    #[test]
    fn test_single_country_collects_all_badges() {
        let countries = vec![Country::scored("SOLO", "Solo", 10.0, 20.0)];
        let merged = merge_placements(&countries, &lists_for(&countries));

        assert_eq!(merged.len(), 1);
        assert_eq!(
            merged[0].badges,
            vec![
                badge(Category::Composite, Position::Gold),
                badge(Category::A, Position::Gold),
                badge(Category::B, Position::Gold),
            ]
        );
    }
}
