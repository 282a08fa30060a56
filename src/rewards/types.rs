//! Reward payloads, player resource totals and applied-reward summaries.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Resource keys the resolver interprets. Anything else in a payload is an
/// effect delta passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Gold,
    Gems,
    Stars,
    Shards,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Gold,
        Resource::Gems,
        Resource::Stars,
        Resource::Shards,
    ];

    /// Key used in payloads and sound/toast text.
    pub fn key(&self) -> &'static str {
        match self {
            Resource::Gold => "gold",
            Resource::Gems => "gems",
            Resource::Stars => "stars",
            Resource::Shards => "shards",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Resource::Gold => "Gold",
            Resource::Gems => "Gems",
            Resource::Stars => "Stars",
            Resource::Shards => "Shards",
        }
    }
}

/// What a reward grants.
///
/// ```json
/// { "gold": -50 }
/// { "gems": 10, "chest": "golden" }
/// { "damage": 0.25, "hp": 0.25, "speed": 0.1, "elixir": 1 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gold: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gems: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shards: Option<i64>,
    /// Chest type id to enqueue for unlocking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chest: Option<String>,
    /// Non-resource keys, e.g. the deltas of a combined boost.
    #[serde(flatten)]
    pub effects: BTreeMap<String, Value>,
}

impl RewardPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, resource: Resource, amount: i64) -> Self {
        *self.slot_mut(resource) = Some(amount);
        self
    }

    pub fn with_chest(mut self, chest_type: impl Into<String>) -> Self {
        self.chest = Some(chest_type.into());
        self
    }

    pub fn with_effect(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.effects.insert(key.into(), value.into());
        self
    }

    pub fn amount(&self, resource: Resource) -> Option<i64> {
        match resource {
            Resource::Gold => self.gold,
            Resource::Gems => self.gems,
            Resource::Stars => self.stars,
            Resource::Shards => self.shards,
        }
    }

    fn slot_mut(&mut self, resource: Resource) -> &mut Option<i64> {
        match resource {
            Resource::Gold => &mut self.gold,
            Resource::Gems => &mut self.gems,
            Resource::Stars => &mut self.stars,
            Resource::Shards => &mut self.shards,
        }
    }

    pub fn is_empty(&self) -> bool {
        Resource::ALL.iter().all(|r| self.amount(*r).is_none())
            && self.chest.is_none()
            && self.effects.is_empty()
    }
}

/// A player's spendable resource totals. Gold never drops below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerResources {
    pub gold: i64,
    pub gems: i64,
    pub stars: i64,
    pub shards: i64,
}

impl PlayerResources {
    pub fn get(&self, resource: Resource) -> i64 {
        match resource {
            Resource::Gold => self.gold,
            Resource::Gems => self.gems,
            Resource::Stars => self.stars,
            Resource::Shards => self.shards,
        }
    }

    pub(crate) fn get_mut(&mut self, resource: Resource) -> &mut i64 {
        match resource {
            Resource::Gold => &mut self.gold,
            Resource::Gems => &mut self.gems,
            Resource::Stars => &mut self.stars,
            Resource::Shards => &mut self.shards,
        }
    }
}

/// Request handed to the chest inventory after a payload names a chest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChestUnlockRequest {
    pub chest_type: String,
}

/// Exactly what `apply` changed, for display.
///
/// Resource fields hold the applied delta, which differs from the requested
/// one when gold was clamped at zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppliedRewardSummary {
    pub gold: i64,
    pub gems: i64,
    pub stars: i64,
    pub shards: i64,
    pub chest: Option<String>,
    pub effects: BTreeMap<String, Value>,
}

impl AppliedRewardSummary {
    pub fn delta(&self, resource: Resource) -> i64 {
        match resource {
            Resource::Gold => self.gold,
            Resource::Gems => self.gems,
            Resource::Stars => self.stars,
            Resource::Shards => self.shards,
        }
    }

    pub(crate) fn set_delta(&mut self, resource: Resource, delta: i64) {
        match resource {
            Resource::Gold => self.gold = delta,
            Resource::Gems => self.gems = delta,
            Resource::Stars => self.stars = delta,
            Resource::Shards => self.shards = delta,
        }
    }

    pub fn is_empty(&self) -> bool {
        Resource::ALL.iter().all(|r| self.delta(*r) == 0)
            && self.chest.is_none()
            && self.effects.is_empty()
    }

    /// Toast lines such as `"+100 Gold"` or `"-30 Gold"`.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = Resource::ALL
            .iter()
            .filter(|r| self.delta(**r) != 0)
            .map(|r| format!("{:+} {}", self.delta(*r), r.display_name()))
            .collect();
        if let Some(chest) = &self.chest {
            lines.push(format!("Chest: {}", chest));
        }
        for (key, value) in &self.effects {
            lines.push(format!("{}: {}", key, value));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_parses_resources_chest_and_effects() {
        let json = r#"{"gold": -50, "gems": 3, "chest": "silver", "damage": 0.25, "elixir": 1}"#;
        let payload: RewardPayload = serde_json::from_str(json).unwrap();

        assert_eq!(payload.gold, Some(-50));
        assert_eq!(payload.gems, Some(3));
        assert_eq!(payload.stars, None);
        assert_eq!(payload.chest.as_deref(), Some("silver"));
        assert_eq!(payload.effects.len(), 2);
        assert_eq!(payload.effects["elixir"], Value::from(1));
    }

    #[test]
    fn test_payload_builder() {
        let payload = RewardPayload::new()
            .with(Resource::Stars, 5)
            .with_chest("golden")
            .with_effect("speed", 0.1);
        assert_eq!(payload.amount(Resource::Stars), Some(5));
        assert_eq!(payload.chest.as_deref(), Some("golden"));
        assert!(payload.effects.contains_key("speed"));
        assert!(!payload.is_empty());
        assert!(RewardPayload::new().is_empty());
    }

    #[test]
    fn test_summary_lines() {
        let summary = AppliedRewardSummary {
            gold: -30,
            gems: 10,
            chest: Some("silver".to_string()),
            ..Default::default()
        };
        assert_eq!(
            summary.lines(),
            vec![
                "-30 Gold".to_string(),
                "+10 Gems".to_string(),
                "Chest: silver".to_string()
            ]
        );
    }

    #[test]
    fn test_empty_summary() {
        assert!(AppliedRewardSummary::default().is_empty());
        assert!(AppliedRewardSummary::default().lines().is_empty());
    }
}
