//! Reward program entities and their two serialization forms.
//!
//! Every card serializes two ways: a snake_case snapshot for local
//! inspection, and the camelCase document shape consumed by the client app.
//! Both stamp `last_updated` at serialization time, so the timestamp reflects
//! publish time rather than data-change time.

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Visa,
    Mastercard,
    Amex,
    Discover,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardType {
    Cashback,
    Points,
    Miles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapPeriod {
    Monthly,
    Quarterly,
    Yearly,
}

/// A bonus rate tied to a spending category.
///
/// `cap_period` is expected whenever `cap` is set, but the pair is not
/// enforced structurally; `cardsync validate` reports violations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryReward {
    pub category: String,
    pub multiplier: f64,
    pub is_percentage: bool,
    #[serde(default)]
    pub cap: Option<f64>,
    #[serde(default)]
    pub cap_period: Option<CapPeriod>,
}

impl CategoryReward {
    pub fn new(category: &str, multiplier: f64, is_percentage: bool) -> Self {
        CategoryReward {
            category: category.to_string(),
            multiplier,
            is_percentage,
            cap: None,
            cap_period: None,
        }
    }

    pub fn capped(
        category: &str,
        multiplier: f64,
        is_percentage: bool,
        cap: f64,
        cap_period: CapPeriod,
    ) -> Self {
        CategoryReward {
            cap: Some(cap),
            cap_period: Some(cap_period),
            ..Self::new(category, multiplier, is_percentage)
        }
    }

    fn to_published(&self) -> Value {
        json!({
            "category": self.category,
            "multiplier": self.multiplier,
            "isPercentage": self.is_percentage,
            "cap": self.cap,
            "capPeriod": self.cap_period,
        })
    }
}

/// A time-boxed bonus valid within one calendar quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotatingCategory {
    pub quarter: u8,
    pub year: i32,
    pub categories: Vec<String>,
    pub multiplier: f64,
    pub is_percentage: bool,
    #[serde(default)]
    pub cap: Option<f64>,
    pub activation_required: bool,
}

impl RotatingCategory {
    fn to_published(&self) -> Value {
        json!({
            "quarter": self.quarter,
            "year": self.year,
            "categories": self.categories,
            "multiplier": self.multiplier,
            "isPercentage": self.is_percentage,
            "cap": self.cap,
            "activationRequired": self.activation_required,
        })
    }
}

/// A choose-your-own-category program: the user picks up to
/// `max_selections` categories from `available_categories`, all earning the
/// same rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectableConfig {
    pub max_selections: u32,
    pub available_categories: Vec<String>,
    pub multiplier: f64,
    pub is_percentage: bool,
    #[serde(default)]
    pub cap: Option<f64>,
    #[serde(default)]
    pub cap_period: Option<CapPeriod>,
}

impl SelectableConfig {
    fn to_published(&self) -> Value {
        json!({
            "maxSelections": self.max_selections,
            "availableCategories": self.available_categories,
            "multiplier": self.multiplier,
            "isPercentage": self.is_percentage,
            "cap": self.cap,
            "capPeriod": self.cap_period,
        })
    }
}

/// The top-level reward-program record for one tracked card.
///
/// `rotating_categories` distinguishes `None` ("not a rotating-category
/// card") from `Some(vec![])` ("rotating program exists, data not yet
/// merged"); the published form collapses both to `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub network: Network,
    pub annual_fee: f64,
    pub reward_type: RewardType,
    pub base_reward: f64,
    pub base_is_percentage: bool,
    pub category_rewards: Vec<CategoryReward>,
    #[serde(default)]
    pub rotating_categories: Option<Vec<RotatingCategory>>,
    #[serde(default)]
    pub selectable_config: Option<SelectableConfig>,
    pub image_color: String,
    #[serde(default)]
    pub last_updated: String,
}

impl Card {
    /// Snapshot form: the internal field names, for local inspection.
    pub fn to_snapshot(&self) -> Value {
        self.to_snapshot_at(&Local::now().to_rfc3339())
    }

    pub fn to_snapshot_at(&self, stamp: &str) -> Value {
        let mut doc = json!(self);
        doc["last_updated"] = json!(stamp);
        doc
    }

    /// Published form: the camelCase document shape the client decodes.
    pub fn to_published(&self) -> Value {
        self.to_published_at(&Local::now().to_rfc3339())
    }

    pub fn to_published_at(&self, stamp: &str) -> Value {
        // An empty rotating list publishes as null, same as a card with no
        // rotating program at all. The client relies on this equivalence.
        let rotating = match &self.rotating_categories {
            Some(list) if !list.is_empty() => {
                json!(
                    list.iter()
                        .map(RotatingCategory::to_published)
                        .collect::<Vec<_>>()
                )
            }
            _ => Value::Null,
        };

        json!({
            "id": self.id,
            "name": self.name,
            "issuer": self.issuer,
            "network": self.network,
            "annualFee": self.annual_fee,
            "rewardType": self.reward_type,
            "baseReward": self.base_reward,
            "baseIsPercentage": self.base_is_percentage,
            "categoryRewards": self
                .category_rewards
                .iter()
                .map(CategoryReward::to_published)
                .collect::<Vec<_>>(),
            "rotatingCategories": rotating,
            "selectableConfig": self
                .selectable_config
                .as_ref()
                .map(SelectableConfig::to_published),
            "imageColor": self.image_color,
            "lastUpdated": stamp,
        })
    }
}
