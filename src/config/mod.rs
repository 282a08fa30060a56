//! Content tables: load once, validate everything, then freeze.
//!
//! The JSON layout mirrors [`RawConfig`]. A table that fails validation makes
//! the whole load fail, so a running engine never sees a partial config.

use crate::achievements::{AchievementDefinition, AchievementKind, AchievementTracker};
use crate::chests::{ChestCatalog, ChestType};
use crate::core::cost_curve::CostCurve;
use crate::error::ConfigError;
use crate::progression::{DailyRewardTrack, TournamentBook, TournamentDef};
use crate::rewards::{RewardEntry, RewardPayload, RewardTable};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const BUILTIN_CONFIG: &str = include_str!("../../data/rewards.json");

pub const SPIN_WHEEL_TABLE: &str = "spin_wheel";
pub const TREASURE_HUNT_TABLE: &str = "treasure_hunt";

/// Config as it appears on disk, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfig {
    pub spin_wheel: Vec<RewardEntry>,
    pub treasure_hunt: Vec<RewardEntry>,
    #[serde(default)]
    pub chest_types: Vec<ChestType>,
    pub daily_rewards: Vec<RewardPayload>,
    #[serde(default)]
    pub achievements: Vec<AchievementDefinition>,
    #[serde(default)]
    pub challenges: Vec<AchievementDefinition>,
    #[serde(default)]
    pub tournaments: Vec<TournamentDef>,
    /// Rarity -> base upgrade cost. Defaults to the standard curve.
    #[serde(default)]
    pub cost_curve: Option<HashMap<String, u64>>,
}

/// Validated, immutable content. Only obtainable through
/// [`EngineConfig::from_raw`] and the loaders built on it.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    spin_wheel: RewardTable,
    treasure_hunt: RewardTable,
    chests: ChestCatalog,
    daily: DailyRewardTrack,
    achievements: AchievementTracker,
    tournaments: TournamentBook,
    cost_curve: CostCurve,
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// The tables shipped with the game.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(BUILTIN_CONFIG)
    }

    pub fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let spin_wheel = RewardTable::new(SPIN_WHEEL_TABLE, raw.spin_wheel)?;
        let treasure_hunt = RewardTable::new(TREASURE_HUNT_TABLE, raw.treasure_hunt)?;
        let chests = ChestCatalog::new(raw.chest_types)?;
        let daily = DailyRewardTrack::new(raw.daily_rewards)?;

        let challenges = raw.challenges.into_iter().map(|mut c| {
            c.kind = AchievementKind::Challenge;
            c
        });
        let definitions: Vec<AchievementDefinition> =
            raw.achievements.into_iter().chain(challenges).collect();
        let achievements = AchievementTracker::new(definitions)?;

        let tournaments = TournamentBook::new(raw.tournaments)?;
        let cost_curve = match raw.cost_curve {
            Some(bases) => CostCurve::new(bases)?,
            None => CostCurve::default(),
        };

        let config = Self {
            spin_wheel,
            treasure_hunt,
            chests,
            daily,
            achievements,
            tournaments,
            cost_curve,
        };
        config.check_chest_references()?;

        log::info!(
            "reward config loaded: {} wheel entries, {} treasure entries, {} chest types, {} achievements",
            config.spin_wheel.entries().len(),
            config.treasure_hunt.entries().len(),
            config.chests.len(),
            config.achievements.len()
        );
        Ok(config)
    }

    pub fn spin_wheel(&self) -> &RewardTable {
        &self.spin_wheel
    }

    pub fn treasure_hunt(&self) -> &RewardTable {
        &self.treasure_hunt
    }

    pub fn chests(&self) -> &ChestCatalog {
        &self.chests
    }

    pub fn daily(&self) -> &DailyRewardTrack {
        &self.daily
    }

    /// Achievements and challenges together.
    pub fn achievements(&self) -> &AchievementTracker {
        &self.achievements
    }

    pub fn tournaments(&self) -> &TournamentBook {
        &self.tournaments
    }

    pub fn cost_curve(&self) -> &CostCurve {
        &self.cost_curve
    }

    /// Every payload that names a chest must name a known one.
    fn check_chest_references(&self) -> Result<(), ConfigError> {
        let payloads = self
            .spin_wheel
            .entries()
            .iter()
            .chain(self.treasure_hunt.entries())
            .map(|e| &e.reward)
            .chain(self.daily.rewards())
            .chain(self.achievements.definitions().iter().map(|d| &d.reward))
            .chain(self.tournaments.iter().map(|t| &t.prize));

        for payload in payloads {
            if let Some(chest) = &payload.chest {
                self.chests.require(chest)?;
            }
        }
        Ok(())
    }
}

/// Swap in achievements without the load-time chest checks, to exercise
/// the engine against content that slipped past validation.
#[cfg(test)]
impl EngineConfig {
    pub(crate) fn with_unchecked_achievements(mut self, achievements: AchievementTracker) -> Self {
        self.achievements = achievements;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "spin_wheel": [
            {"id": "a", "weight": 25, "reward": {"gold": 10}},
            {"id": "b", "weight": 75, "reward": {"gems": 1}}
        ],
        "treasure_hunt": [
            {"id": "trap", "weight": 1, "reward": {"gold": -50}}
        ],
        "daily_rewards": [{"gold": 100}]
    }"#;

    #[test]
    fn test_minimal_config_loads() {
        let config = EngineConfig::from_json(MINIMAL).unwrap();
        assert_eq!(config.spin_wheel.total_weight(), 100);
        assert_eq!(config.treasure_hunt.name(), TREASURE_HUNT_TABLE);
        assert!(config.chests.is_empty());
        assert!(config.achievements.is_empty());
        assert_eq!(config.cost_curve.upgrade_cost(4, "epic"), 240);
    }

    #[test]
    fn test_builtin_config_loads() {
        let config = EngineConfig::builtin().unwrap();
        assert!(config.spin_wheel.entries().len() >= 4);
        assert!(!config.chests.is_empty());
        assert!(!config.achievements.is_empty());
        assert!(config
            .achievements
            .definitions()
            .iter()
            .any(|d| d.kind == AchievementKind::Challenge));
    }

    #[test]
    fn test_bad_weight_fails_whole_load() {
        let json = MINIMAL.replace("\"weight\": 75", "\"weight\": 0");
        assert!(matches!(
            EngineConfig::from_json(&json),
            Err(ConfigError::InvalidWeight { entry, .. }) if entry == "b"
        ));
    }

    #[test]
    fn test_empty_table_fails_load() {
        let json = r#"{"spin_wheel": [], "treasure_hunt": [], "daily_rewards": [{"gold": 1}]}"#;
        assert!(matches!(
            EngineConfig::from_json(json),
            Err(ConfigError::InvalidTable { table }) if table == SPIN_WHEEL_TABLE
        ));
    }

    #[test]
    fn test_unknown_chest_reference_fails_load() {
        let json = MINIMAL.replace("{\"gems\": 1}", "{\"chest\": \"mythic\"}");
        assert!(matches!(
            EngineConfig::from_json(&json),
            Err(ConfigError::UnknownChestType { chest }) if chest == "mythic"
        ));
    }

    #[test]
    fn test_duplicate_id_across_achievements_and_challenges() {
        let json = MINIMAL.replace(
            "\"daily_rewards\"",
            r#""achievements": [{"id": "x", "name": "X", "requirement": {"type": "in_clan"}}],
               "challenges": [{"id": "x", "name": "X again", "requirement": {"type": "wins", "at_least": 3}}],
               "daily_rewards""#,
        );
        assert!(matches!(
            EngineConfig::from_json(&json),
            Err(ConfigError::DuplicateAchievementId { id }) if id == "x"
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            EngineConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            EngineConfig::load("/nonexistent/rewards.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
