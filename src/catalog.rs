//! The static baseline catalog and the rotating-overlay merge.
//!
//! The baseline is authored once per release; each pipeline run builds a
//! fresh copy, merges the rotating overlay into it and hands it to a
//! publisher. Baseline ids are the single source of truth: the overlay can
//! never introduce a card.

use std::collections::HashMap;

use tracing::debug;

use crate::model::{
    CapPeriod, Card, CategoryReward, Network, RewardType, RotatingCategory, SelectableConfig,
};

/// Replace `rotating_categories` on every card whose id appears in the
/// overlay. Cards without an overlay entry are left untouched, overlay ids
/// without a baseline card are dropped. Idempotent.
pub fn merge_rotating(cards: &mut [Card], rotating_by_id: &HashMap<String, Vec<RotatingCategory>>) {
    for card in cards.iter_mut() {
        if let Some(rotating) = rotating_by_id.get(&card.id) {
            debug!(card = %card.id, quarters = rotating.len(), "merging rotating calendar");
            card.rotating_categories = Some(rotating.clone());
        }
    }
}

/// The tracked cards. `rotating_categories: Some(vec![])` marks a card whose
/// rotating calendar is filled in by the merge step; `None` marks a card
/// with no rotating program.
pub fn baseline() -> Vec<Card> {
    vec![
        Card {
            id: "chase-sapphire-preferred".to_string(),
            name: "Chase Sapphire Preferred".to_string(),
            issuer: "Chase".to_string(),
            network: Network::Visa,
            annual_fee: 95.0,
            reward_type: RewardType::Points,
            base_reward: 1.0,
            base_is_percentage: false,
            category_rewards: vec![
                CategoryReward::new("dining", 3.0, false),
                CategoryReward::new("streaming", 3.0, false),
                CategoryReward::new("onlineShopping", 3.0, false),
                CategoryReward::new("travel", 5.0, false),
            ],
            rotating_categories: None,
            selectable_config: None,
            image_color: "#1A1F71".to_string(),
            last_updated: String::new(),
        },
        Card {
            id: "chase-freedom-flex".to_string(),
            name: "Chase Freedom Flex".to_string(),
            issuer: "Chase".to_string(),
            network: Network::Mastercard,
            annual_fee: 0.0,
            reward_type: RewardType::Points,
            base_reward: 1.0,
            base_is_percentage: false,
            category_rewards: vec![
                CategoryReward::new("dining", 3.0, false),
                CategoryReward::new("drugstore", 3.0, false),
                CategoryReward::new("travel", 5.0, false),
            ],
            rotating_categories: Some(vec![]),
            selectable_config: None,
            image_color: "#0066B2".to_string(),
            last_updated: String::new(),
        },
        Card {
            id: "amex-gold".to_string(),
            name: "American Express Gold".to_string(),
            issuer: "American Express".to_string(),
            network: Network::Amex,
            annual_fee: 250.0,
            reward_type: RewardType::Points,
            base_reward: 1.0,
            base_is_percentage: false,
            category_rewards: vec![
                CategoryReward::new("dining", 4.0, false),
                CategoryReward::capped("grocery", 4.0, false, 25000.0, CapPeriod::Yearly),
            ],
            rotating_categories: None,
            selectable_config: None,
            image_color: "#B4975A".to_string(),
            last_updated: String::new(),
        },
        Card {
            id: "amex-blue-cash-preferred".to_string(),
            name: "Blue Cash Preferred".to_string(),
            issuer: "American Express".to_string(),
            network: Network::Amex,
            annual_fee: 95.0,
            reward_type: RewardType::Cashback,
            base_reward: 1.0,
            base_is_percentage: true,
            category_rewards: vec![
                CategoryReward::capped("grocery", 6.0, true, 6000.0, CapPeriod::Yearly),
                CategoryReward::new("streaming", 6.0, true),
                CategoryReward::new("transit", 3.0, true),
                CategoryReward::new("gas", 3.0, true),
            ],
            rotating_categories: None,
            selectable_config: None,
            image_color: "#006FCF".to_string(),
            last_updated: String::new(),
        },
        Card {
            id: "citi-double-cash".to_string(),
            name: "Citi Double Cash".to_string(),
            issuer: "Citi".to_string(),
            network: Network::Mastercard,
            annual_fee: 0.0,
            reward_type: RewardType::Cashback,
            base_reward: 2.0,
            base_is_percentage: true,
            category_rewards: vec![],
            rotating_categories: None,
            selectable_config: None,
            image_color: "#003B70".to_string(),
            last_updated: String::new(),
        },
        Card {
            id: "capital-one-savor".to_string(),
            name: "Capital One Savor".to_string(),
            issuer: "Capital One".to_string(),
            network: Network::Mastercard,
            annual_fee: 95.0,
            reward_type: RewardType::Cashback,
            base_reward: 1.0,
            base_is_percentage: true,
            category_rewards: vec![
                CategoryReward::new("dining", 4.0, true),
                CategoryReward::new("entertainment", 4.0, true),
                CategoryReward::new("streaming", 4.0, true),
                CategoryReward::new("grocery", 3.0, true),
            ],
            rotating_categories: None,
            selectable_config: None,
            image_color: "#D03027".to_string(),
            last_updated: String::new(),
        },
        Card {
            id: "discover-it".to_string(),
            name: "Discover it Cash Back".to_string(),
            issuer: "Discover".to_string(),
            network: Network::Discover,
            annual_fee: 0.0,
            reward_type: RewardType::Cashback,
            base_reward: 1.0,
            base_is_percentage: true,
            category_rewards: vec![],
            rotating_categories: Some(vec![]),
            selectable_config: None,
            image_color: "#FF6600".to_string(),
            last_updated: String::new(),
        },
        Card {
            id: "boa-customized-cash".to_string(),
            name: "Bank of America Customized Cash".to_string(),
            issuer: "Bank of America".to_string(),
            network: Network::Visa,
            annual_fee: 0.0,
            reward_type: RewardType::Cashback,
            base_reward: 1.0,
            base_is_percentage: true,
            category_rewards: vec![
                CategoryReward::new("grocery", 2.0, true),
                CategoryReward::new("wholesale", 2.0, true),
            ],
            rotating_categories: None,
            selectable_config: Some(SelectableConfig {
                max_selections: 1,
                available_categories: vec![
                    "gas".to_string(),
                    "onlineShopping".to_string(),
                    "dining".to_string(),
                    "travel".to_string(),
                    "drugstore".to_string(),
                    "homeImprovement".to_string(),
                ],
                multiplier: 3.0,
                is_percentage: true,
                cap: Some(2500.0),
                cap_period: Some(CapPeriod::Quarterly),
            }),
            image_color: "#E31837".to_string(),
            last_updated: String::new(),
        },
        Card {
            id: "us-bank-cash-plus".to_string(),
            name: "US Bank Cash+".to_string(),
            issuer: "US Bank".to_string(),
            network: Network::Visa,
            annual_fee: 0.0,
            reward_type: RewardType::Cashback,
            base_reward: 1.0,
            base_is_percentage: true,
            category_rewards: vec![],
            rotating_categories: None,
            selectable_config: Some(SelectableConfig {
                max_selections: 2,
                available_categories: vec![
                    "gas".to_string(),
                    "grocery".to_string(),
                    "dining".to_string(),
                    "utilities".to_string(),
                    "streaming".to_string(),
                    "transit".to_string(),
                    "homeImprovement".to_string(),
                ],
                multiplier: 5.0,
                is_percentage: true,
                cap: Some(2000.0),
                cap_period: Some(CapPeriod::Quarterly),
            }),
            image_color: "#0C2340".to_string(),
            last_updated: String::new(),
        },
        Card {
            id: "wells-fargo-active-cash".to_string(),
            name: "Wells Fargo Active Cash".to_string(),
            issuer: "Wells Fargo".to_string(),
            network: Network::Visa,
            annual_fee: 0.0,
            reward_type: RewardType::Cashback,
            base_reward: 2.0,
            base_is_percentage: true,
            category_rewards: vec![],
            rotating_categories: None,
            selectable_config: None,
            image_color: "#D71E28".to_string(),
            last_updated: String::new(),
        },
    ]
}
