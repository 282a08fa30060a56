//! Achievements and challenges: predicates over player progress, the
//! completion record, and the tracker that detects new completions.

pub mod tracker;
pub mod types;

pub use tracker::{evaluate, AchievementTracker, NewlyCompleted};
pub use types::{
    AchievementCompletionSet, AchievementDefinition, AchievementKind, CompletedAchievement,
    CompletionStore, PlayerProgressSnapshot, Requirement,
};
