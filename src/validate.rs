//! Advisory catalog checks.
//!
//! The serializers deliberately pass malformed data through unchanged, so
//! problems like a cap without a cap period would otherwise surface only in
//! the client. `cardsync validate` reports them ahead of a publish; the
//! publish path itself never validates.

use crate::model::Card;

/// Check one catalog and return a human-readable problem list. Empty means
/// clean.
pub fn validate_catalog(cards: &[Card]) -> Vec<String> {
    let mut problems = Vec::new();

    for card in cards {
        let mut seen = std::collections::HashSet::new();
        for reward in &card.category_rewards {
            if reward.cap.is_some() && reward.cap_period.is_none() {
                problems.push(format!(
                    "[{}] category '{}' has a cap without a cap period",
                    card.id, reward.category
                ));
            }
            if !seen.insert(reward.category.as_str()) {
                problems.push(format!(
                    "[{}] duplicate category reward '{}'",
                    card.id, reward.category
                ));
            }
        }

        if let Some(rotating) = &card.rotating_categories {
            for entry in rotating {
                if !(1..=4).contains(&entry.quarter) {
                    problems.push(format!(
                        "[{}] rotating entry has quarter {} outside 1-4",
                        card.id, entry.quarter
                    ));
                }
                if entry.categories.is_empty() {
                    problems.push(format!(
                        "[{}] rotating entry Q{} {} has no categories",
                        card.id, entry.quarter, entry.year
                    ));
                }
            }
        }

        if let Some(selectable) = &card.selectable_config {
            if selectable.max_selections == 0 {
                problems.push(format!("[{}] selectable max_selections is zero", card.id));
            }
            if (selectable.max_selections as usize) > selectable.available_categories.len() {
                problems.push(format!(
                    "[{}] selectable max_selections {} exceeds the {} available categories",
                    card.id,
                    selectable.max_selections,
                    selectable.available_categories.len()
                ));
            }
            if selectable.cap.is_some() && selectable.cap_period.is_none() {
                problems.push(format!(
                    "[{}] selectable config has a cap without a cap period",
                    card.id
                ));
            }
        }

        if card.annual_fee < 0.0 {
            problems.push(format!("[{}] negative annual fee", card.id));
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::model::{CategoryReward, SelectableConfig};

    #[test]
    fn shipped_baseline_is_clean() {
        assert_eq!(validate_catalog(&catalog::baseline()), Vec::<String>::new());
    }

    #[test]
    fn cap_without_period_is_reported_not_rejected() {
        let mut cards = catalog::baseline();
        cards[0].category_rewards.push(CategoryReward {
            category: "gas".to_string(),
            multiplier: 2.0,
            is_percentage: true,
            cap: Some(1000.0),
            cap_period: None,
        });

        let problems = validate_catalog(&cards);
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("cap without a cap period"));

        // The serializer still emits the card untouched.
        let doc = cards[0].to_published_at("2025-01-01T00:00:00+00:00");
        let rewards = doc["categoryRewards"].as_array().unwrap();
        assert_eq!(rewards.last().unwrap()["cap"], serde_json::json!(1000.0));
    }

    #[test]
    fn selectable_arity_is_checked() {
        let mut cards = catalog::baseline();
        cards[0].selectable_config = Some(SelectableConfig {
            max_selections: 3,
            available_categories: vec!["gas".to_string()],
            multiplier: 5.0,
            is_percentage: true,
            cap: None,
            cap_period: None,
        });

        let problems = validate_catalog(&cards);
        assert!(problems.iter().any(|p| p.contains("exceeds")));
    }

    #[test]
    fn duplicate_categories_are_reported() {
        let mut cards = catalog::baseline();
        cards[0]
            .category_rewards
            .push(CategoryReward::new("dining", 2.0, false));

        let problems = validate_catalog(&cards);
        assert!(problems.iter().any(|p| p.contains("duplicate")));
    }
}
