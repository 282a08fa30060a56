//! Achievement and challenge definitions, progress snapshots and the
//! completion record.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::rewards::RewardPayload;

/// Read-only view of the player's progress used for predicate checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProgressSnapshot {
    pub trophies: u32,
    pub wins: u32,
    pub total_crowns: u32,
    pub unlocked_card_count: u32,
    /// Clan name, if the player belongs to one.
    pub clan_membership: Option<String>,
}

/// Condition an achievement waits for.
///
/// Every variant is a lower bound on a tracked metric (or clan membership),
/// so once met it stays met as the metric grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Requirement {
    Trophies { at_least: u32 },
    Wins { at_least: u32 },
    Crowns { at_least: u32 },
    CardsUnlocked { at_least: u32 },
    InClan,
    All { of: Vec<Requirement> },
}

impl Requirement {
    pub fn is_met(&self, snapshot: &PlayerProgressSnapshot) -> bool {
        match self {
            Requirement::Trophies { at_least } => snapshot.trophies >= *at_least,
            Requirement::Wins { at_least } => snapshot.wins >= *at_least,
            Requirement::Crowns { at_least } => snapshot.total_crowns >= *at_least,
            Requirement::CardsUnlocked { at_least } => snapshot.unlocked_card_count >= *at_least,
            Requirement::InClan => snapshot.clan_membership.is_some(),
            Requirement::All { of } => of.iter().all(|r| r.is_met(snapshot)),
        }
    }

    /// `(current, target)` for progress bars. `current` never exceeds
    /// `target`.
    pub fn progress(&self, snapshot: &PlayerProgressSnapshot) -> (u64, u64) {
        let bounded = |value: u32, target: u32| (value.min(target) as u64, target as u64);
        match self {
            Requirement::Trophies { at_least } => bounded(snapshot.trophies, *at_least),
            Requirement::Wins { at_least } => bounded(snapshot.wins, *at_least),
            Requirement::Crowns { at_least } => bounded(snapshot.total_crowns, *at_least),
            Requirement::CardsUnlocked { at_least } => {
                bounded(snapshot.unlocked_card_count, *at_least)
            }
            Requirement::InClan => (snapshot.clan_membership.is_some() as u64, 1),
            Requirement::All { of } => of
                .iter()
                .map(|r| r.progress(snapshot))
                .fold((0, 0), |(c, t), (rc, rt)| (c + rc, t + rt)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    #[default]
    Achievement,
    Challenge,
}

impl AchievementKind {
    pub fn name(&self) -> &'static str {
        match self {
            AchievementKind::Achievement => "Achievement",
            AchievementKind::Challenge => "Challenge",
        }
    }
}

/// A goal with the reward granted the first time it is met.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub kind: AchievementKind,
    pub requirement: Requirement,
    #[serde(default)]
    pub reward: RewardPayload,
}

impl AchievementDefinition {
    pub fn new(id: impl Into<String>, requirement: Requirement, reward: RewardPayload) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            description: String::new(),
            kind: AchievementKind::Achievement,
            requirement,
            reward,
        }
    }

    pub fn is_met(&self, snapshot: &PlayerProgressSnapshot) -> bool {
        self.requirement.is_met(snapshot)
    }
}

/// Accessor for "already granted" flags. Storage belongs to the caller.
pub trait CompletionStore {
    fn is_completed(&self, id: &str) -> bool;
    fn mark_completed(&mut self, id: &str);
}

impl CompletionStore for HashMap<String, bool> {
    fn is_completed(&self, id: &str) -> bool {
        self.get(id).copied().unwrap_or(false)
    }

    fn mark_completed(&mut self, id: &str) {
        self.insert(id.to_string(), true);
    }
}

/// Record of a completed achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedAchievement {
    pub completed_at: i64,
}

/// Completion flags with timestamps, serialisable by the persistence layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementCompletionSet {
    pub completed: HashMap<String, CompletedAchievement>,
}

impl AchievementCompletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Completion percentage (0.0 - 100.0) against `total` definitions.
    pub fn completion_percentage(&self, total: usize) -> f32 {
        if total == 0 {
            return 0.0;
        }
        (self.completed_count() as f32 / total as f32) * 100.0
    }

    pub fn completed_at(&self, id: &str) -> Option<i64> {
        self.completed.get(id).map(|c| c.completed_at)
    }
}

impl CompletionStore for AchievementCompletionSet {
    fn is_completed(&self, id: &str) -> bool {
        self.completed.contains_key(id)
    }

    fn mark_completed(&mut self, id: &str) {
        self.completed
            .entry(id.to_string())
            .or_insert_with(|| CompletedAchievement {
                completed_at: chrono::Utc::now().timestamp(),
            });
    }
}
