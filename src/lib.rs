//! Clash Rewards - reward and progression engine for a collectible card
//! battle game.
//!
//! Turns weighted reward tables, chests, daily rewards, tournaments and
//! achievements into reproducible changes to a player's account. Rendering,
//! audio and persistence live elsewhere; this crate hands them summaries,
//! sound cue keys and serialisable state.

pub mod achievements;
pub mod chests;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod progression;
pub mod rewards;
pub mod simulator;

pub use achievements::{AchievementCompletionSet, AchievementDefinition, PlayerProgressSnapshot};
pub use config::EngineConfig;
pub use core::{describe, remaining, upgrade_cost, CooldownTimer};
pub use engine::{PlayerAccount, RewardEngine, RewardOutcome};
pub use error::{ClaimError, ConfigError, EngineError};
pub use feedback::SoundCue;
pub use rewards::{AppliedRewardSummary, PlayerResources, RewardEntry, RewardPayload, RewardTable};
