//! Static-table rotating-category adapter.
//!
//! Issuers publish rotating calendars on pages that mostly require
//! JavaScript, so until a live scraper lands the calendar is maintained as a
//! table here, refreshed quarterly, with per-deployment overrides available
//! through the config file. The output contract is the same one a scraper
//! would satisfy.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Datelike, Local};
use tracing::{debug, warn};

use crate::model::RotatingCategory;
use crate::sources::RotatingSource;

/// Quarter containing `month`, which must be 1-12 as chrono reports it.
pub fn quarter_of(month: u32) -> u8 {
    debug_assert!((1..=12).contains(&month), "month {month} outside 1-12");
    ((month - 1) / 3 + 1) as u8
}

/// Quarter of the process clock.
pub fn current_quarter() -> u8 {
    quarter_of(Local::now().month())
}

struct RotatingRate {
    multiplier: f64,
    is_percentage: bool,
    cap: Option<f64>,
}

/// Cards with a rotating program, with the rate every quarter shares.
fn tracked_cards() -> Vec<(&'static str, RotatingRate)> {
    vec![
        (
            "chase-freedom-flex",
            RotatingRate {
                multiplier: 5.0,
                is_percentage: false,
                cap: Some(1500.0),
            },
        ),
        (
            "discover-it",
            RotatingRate {
                multiplier: 5.0,
                is_percentage: true,
                cap: Some(1500.0),
            },
        ),
    ]
}

type QuarterTable = HashMap<u8, Vec<String>>;

fn table(entries: &[(u8, &[&str])]) -> QuarterTable {
    entries
        .iter()
        .map(|(q, cats)| (*q, cats.iter().map(|c| c.to_string()).collect()))
        .collect()
}

// Updated quarterly from the issuers' published calendars.
fn assignments_2025() -> HashMap<String, QuarterTable> {
    HashMap::from([
        (
            "chase-freedom-flex".to_string(),
            table(&[
                (1, &["grocery"]),
                (2, &["gas", "homeImprovement"]),
                (3, &["dining", "drugstore"]),
                (4, &["amazon", "wholesale"]),
            ]),
        ),
        (
            "discover-it".to_string(),
            table(&[
                (1, &["grocery", "drugstore"]),
                (2, &["gas", "homeImprovement"]),
                (3, &["dining", "paypal"]),
                (4, &["amazon", "onlineShopping"]),
            ]),
        ),
    ])
}

pub struct StaticTableSource {
    year: i32,
    assignments: HashMap<String, QuarterTable>,
}

impl StaticTableSource {
    pub fn new() -> Self {
        Self::for_year(Local::now().year())
    }

    pub fn for_year(year: i32) -> Self {
        StaticTableSource {
            year,
            assignments: assignments_2025(),
        }
    }

    /// Overlay config-supplied quarter tables on top of the built-in ones.
    pub fn with_overrides(mut self, overrides: &HashMap<String, QuarterTable>) -> Self {
        for (card_id, quarters) in overrides {
            if !tracked_cards().iter().any(|(id, _)| id == card_id) {
                warn!(card = %card_id, "rotating override for a card with no rotating program; ignored");
                continue;
            }
            let table = self.assignments.entry(card_id.clone()).or_default();
            for (quarter, categories) in quarters {
                table.insert(*quarter, categories.clone());
            }
        }
        self
    }

    /// Categories active right now for one card, `["other"]` if unknown.
    pub fn current_categories(&self, card_id: &str) -> Vec<String> {
        self.categories_for(card_id, current_quarter())
    }

    fn categories_for(&self, card_id: &str, quarter: u8) -> Vec<String> {
        self.assignments
            .get(card_id)
            .and_then(|table| table.get(&quarter))
            .cloned()
            .unwrap_or_else(|| vec!["other".to_string()])
    }
}

impl Default for StaticTableSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RotatingSource for StaticTableSource {
    async fn fetch(&self) -> Result<HashMap<String, Vec<RotatingCategory>>> {
        let mut result = HashMap::new();

        for (card_id, rate) in tracked_cards() {
            // Every tracked card gets a complete calendar; quarters missing
            // from the table fall back to the "other" sentinel so an
            // un-updated table never breaks the merge.
            let calendar: Vec<RotatingCategory> = (1..=4)
                .map(|quarter| RotatingCategory {
                    quarter,
                    year: self.year,
                    categories: self.categories_for(card_id, quarter),
                    multiplier: rate.multiplier,
                    is_percentage: rate.is_percentage,
                    cap: rate.cap,
                    activation_required: true,
                })
                .collect();

            debug!(card = card_id, year = self.year, "built rotating calendar");
            result.insert(card_id.to_string(), calendar);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_arithmetic() {
        assert_eq!(quarter_of(1), 1);
        assert_eq!(quarter_of(3), 1);
        assert_eq!(quarter_of(4), 2);
        assert_eq!(quarter_of(6), 2);
        assert_eq!(quarter_of(7), 3);
        assert_eq!(quarter_of(10), 4);
        assert_eq!(quarter_of(12), 4);
    }

    #[test]
    #[should_panic(expected = "outside 1-12")]
    fn quarter_of_rejects_month_zero() {
        quarter_of(0);
    }

    #[tokio::test]
    async fn override_for_untracked_card_is_ignored() {
        let overrides = HashMap::from([(
            "wells-fargo-active-cash".to_string(),
            HashMap::from([(1u8, vec!["gas".to_string()])]),
        )]);
        let source = StaticTableSource::for_year(2025).with_overrides(&overrides);

        assert!(!source.assignments.contains_key("wells-fargo-active-cash"));

        let result = source.fetch().await.unwrap();
        assert!(!result.contains_key("wells-fargo-active-cash"));
        // Tracked cards are unaffected by the stray override.
        assert_eq!(result["discover-it"][0].categories, vec!["grocery", "drugstore"]);
    }

    #[tokio::test]
    async fn every_tracked_card_gets_four_quarters() {
        let result = StaticTableSource::for_year(2025).fetch().await.unwrap();

        assert_eq!(result.len(), 2);
        for calendar in result.values() {
            let quarters: Vec<u8> = calendar.iter().map(|r| r.quarter).collect();
            assert_eq!(quarters, vec![1, 2, 3, 4]);
            assert!(calendar.iter().all(|r| r.year == 2025));
            assert!(calendar.iter().all(|r| r.activation_required));
        }
    }

    #[tokio::test]
    async fn discover_it_calendar_matches_table() {
        let result = StaticTableSource::for_year(2025).fetch().await.unwrap();
        let calendar = &result["discover-it"];

        assert_eq!(calendar[0].categories, vec!["grocery", "drugstore"]);
        assert_eq!(calendar[1].categories, vec!["gas", "homeImprovement"]);
        assert_eq!(calendar[2].categories, vec!["dining", "paypal"]);
        assert_eq!(calendar[3].categories, vec!["amazon", "onlineShopping"]);
        assert_eq!(calendar[0].multiplier, 5.0);
        assert!(calendar[0].is_percentage);
        assert_eq!(calendar[0].cap, Some(1500.0));
    }

    #[tokio::test]
    async fn missing_quarters_fall_back_to_other() {
        // Start from an empty table so only the override's Q1 is known.
        let overrides = HashMap::from([(
            "chase-freedom-flex".to_string(),
            HashMap::from([(1u8, vec!["grocery".to_string()])]),
        )]);
        let mut source = StaticTableSource::for_year(2025);
        source.assignments.clear();
        let source = source.with_overrides(&overrides);

        let result = source.fetch().await.unwrap();

        let chase = &result["chase-freedom-flex"];
        assert_eq!(chase[0].categories, vec!["grocery"]);
        assert_eq!(chase[1].categories, vec!["other"]);
        assert_eq!(chase[2].categories, vec!["other"]);
        assert_eq!(chase[3].categories, vec!["other"]);

        // A card with no table at all still yields a full sentinel calendar.
        let discover = &result["discover-it"];
        assert!(discover.iter().all(|r| r.categories == vec!["other"]));
    }

    #[tokio::test]
    async fn overrides_replace_individual_quarters() {
        let overrides = HashMap::from([(
            "discover-it".to_string(),
            HashMap::from([(2u8, vec!["streaming".to_string()])]),
        )]);
        let source = StaticTableSource::for_year(2025).with_overrides(&overrides);

        let result = source.fetch().await.unwrap();
        let calendar = &result["discover-it"];
        assert_eq!(calendar[1].categories, vec!["streaming"]);
        // Untouched quarters keep the built-in assignment.
        assert_eq!(calendar[0].categories, vec!["grocery", "drugstore"]);
    }

    #[test]
    fn current_categories_uses_the_table() {
        let source = StaticTableSource::for_year(2025);
        let cats = source.current_categories("discover-it");
        assert!(!cats.is_empty());
        assert_eq!(source.current_categories("unknown-card"), vec!["other"]);
    }
}
