//! Reward engine: draws, applies and chains rewards for a player account.
//!
//! Every operation follows the same flow: produce a payload (from a table
//! draw, a chest, the daily track or a tournament prize), apply it, then
//! re-check achievements and apply the rewards of any that just completed.
//! Callers must not run two operations against the same account at once.

use crate::achievements::{
    AchievementCompletionSet, AchievementKind, CompletionStore, PlayerProgressSnapshot,
};
use crate::chests::{ChestQueue, ChestState};
use crate::config::EngineConfig;
use crate::core::timer::CooldownTimer;
use crate::error::{ClaimError, ConfigError, EngineError, EngineResult};
use crate::feedback::SoundCue;
use crate::progression::{DailyRewardState, TournamentEntry};
use crate::rewards::{AppliedRewardSummary, PlayerResources, RewardPayload, RewardResolver, RewardTable};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Everything the engine mutates for one player. Owned and persisted by the
/// caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerAccount {
    pub resources: PlayerResources,
    pub completion: AchievementCompletionSet,
    pub chests: ChestQueue,
    pub daily: DailyRewardState,
    pub tournaments: Vec<TournamentEntry>,
}

/// Reward granted by an achievement or challenge completing.
#[derive(Debug, Clone, PartialEq)]
pub struct AchievementReward {
    pub id: String,
    pub name: String,
    pub kind: AchievementKind,
    pub summary: AppliedRewardSummary,
}

/// Result of a reward action, ready for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardOutcome {
    /// What produced the reward, e.g. the wheel segment label.
    pub source: String,
    pub reward: AppliedRewardSummary,
    /// Cards for the card collection (chest openings only).
    pub cards: u32,
    pub achievements: Vec<AchievementReward>,
    pub cue: SoundCue,
}

impl RewardOutcome {
    /// Net change across the primary reward and all achievement rewards.
    pub fn total_gold(&self) -> i64 {
        self.reward.gold + self.achievements.iter().map(|a| a.summary.gold).sum::<i64>()
    }
}

fn cue_for(reward: &AppliedRewardSummary, achievements: &[AchievementReward]) -> SoundCue {
    if !achievements.is_empty() {
        SoundCue::Notification
    } else if reward.gold < 0 {
        SoundCue::Error
    } else if reward.is_empty() {
        SoundCue::Click
    } else {
        SoundCue::Success
    }
}

fn refused<T>(action: &str, result: Result<T, ClaimError>) -> Result<T, ClaimError> {
    if let Err(e) = &result {
        log::warn!("{} refused: {}", action, e);
    }
    result
}

#[derive(Debug)]
pub struct RewardEngine {
    config: EngineConfig,
    resolver: RewardResolver,
}

impl RewardEngine {
    pub fn new(config: EngineConfig) -> Self {
        let resolver = RewardResolver::new(config.chests());
        Self { config, resolver }
    }

    /// Engine over the built-in tables.
    pub fn builtin() -> Result<Self, ConfigError> {
        EngineConfig::builtin().map(Self::new)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Apply `payload` and then any achievements it (or earlier progress)
    /// completed.
    pub fn grant(
        &self,
        source: impl Into<String>,
        payload: &RewardPayload,
        account: &mut PlayerAccount,
        snapshot: &PlayerProgressSnapshot,
    ) -> Result<RewardOutcome, ConfigError> {
        self.resolver.validate(payload)?;
        self.validate_pending(account, snapshot)?;
        let reward = self
            .resolver
            .apply(payload, &mut account.resources, &mut account.chests)?;
        let achievements = self.check_achievements(account, snapshot)?;
        let cue = cue_for(&reward, &achievements);
        Ok(RewardOutcome {
            source: source.into(),
            reward,
            cards: 0,
            achievements,
            cue,
        })
    }

    /// Check the rewards of every achievement `snapshot` would complete,
    /// without marking anything.
    fn validate_pending(
        &self,
        account: &PlayerAccount,
        snapshot: &PlayerProgressSnapshot,
    ) -> Result<(), ConfigError> {
        self.config
            .achievements()
            .definitions()
            .iter()
            .filter(|d| !account.completion.is_completed(&d.id) && d.is_met(snapshot))
            .try_for_each(|d| self.resolver.validate(&d.reward))
    }

    /// Mark and pay out achievements newly satisfied by `snapshot`.
    ///
    /// Nothing is marked or paid when any pending reward fails validation.
    pub fn check_achievements(
        &self,
        account: &mut PlayerAccount,
        snapshot: &PlayerProgressSnapshot,
    ) -> Result<Vec<AchievementReward>, ConfigError> {
        self.validate_pending(account, snapshot)?;
        let newly: Vec<_> = self
            .config
            .achievements()
            .evaluate(snapshot, &mut account.completion)
            .collect();

        let mut rewards = Vec::with_capacity(newly.len());
        for def in newly {
            let summary =
                self.resolver
                    .apply(&def.reward, &mut account.resources, &mut account.chests)?;
            rewards.push(AchievementReward {
                id: def.id.clone(),
                name: def.name.clone(),
                kind: def.kind,
                summary,
            });
        }
        Ok(rewards)
    }

    fn draw_and_grant<R: Rng + ?Sized>(
        &self,
        table: &RewardTable,
        account: &mut PlayerAccount,
        snapshot: &PlayerProgressSnapshot,
        rng: &mut R,
    ) -> Result<RewardOutcome, ConfigError> {
        let entry = table.draw(rng);
        self.grant(entry.label.clone(), &entry.reward, account, snapshot)
    }

    pub fn spin_wheel<R: Rng + ?Sized>(
        &self,
        account: &mut PlayerAccount,
        snapshot: &PlayerProgressSnapshot,
        rng: &mut R,
    ) -> Result<RewardOutcome, ConfigError> {
        self.draw_and_grant(self.config.spin_wheel(), account, snapshot, rng)
    }

    pub fn treasure_hunt<R: Rng + ?Sized>(
        &self,
        account: &mut PlayerAccount,
        snapshot: &PlayerProgressSnapshot,
        rng: &mut R,
    ) -> Result<RewardOutcome, ConfigError> {
        self.draw_and_grant(self.config.treasure_hunt(), account, snapshot, rng)
    }

    pub fn claim_daily(
        &self,
        account: &mut PlayerAccount,
        snapshot: &PlayerProgressSnapshot,
        now: i64,
    ) -> EngineResult<RewardOutcome> {
        let claim = refused("daily claim", self.config.daily().claim(&mut account.daily, now))?;
        let source = format!("Day {}", claim.day);
        Ok(self.grant(source, claim.reward, account, snapshot)?)
    }

    /// Milliseconds until the daily reward can be claimed again.
    pub fn daily_remaining(&self, account: &PlayerAccount, now: i64) -> u64 {
        self.config.daily().remaining(&account.daily, now)
    }

    pub fn start_chest_unlock(
        &self,
        account: &mut PlayerAccount,
        index: usize,
        now: i64,
    ) -> EngineResult<CooldownTimer> {
        account.chests.start_unlock(index, now, self.config.chests())
    }

    pub fn open_chest<R: Rng + ?Sized>(
        &self,
        account: &mut PlayerAccount,
        snapshot: &PlayerProgressSnapshot,
        index: usize,
        now: i64,
        rng: &mut R,
    ) -> EngineResult<RewardOutcome> {
        let contents = account
            .chests
            .open(index, now, self.config.chests(), rng)
            .map_err(|e| {
                if let EngineError::Claim(claim) = &e {
                    log::warn!("chest open refused: {}", claim);
                }
                e
            })?;
        let name = self.config.chests().require(&contents.chest_type)?.name.clone();
        let payload = RewardPayload {
            gold: Some(i64::try_from(contents.gold).unwrap_or(i64::MAX)),
            ..Default::default()
        };
        let mut outcome = self.grant(name, &payload, account, snapshot)?;
        outcome.cards = contents.card_count;
        if outcome.achievements.is_empty() {
            outcome.cue = SoundCue::Reward;
        }
        Ok(outcome)
    }

    pub fn chest_status(&self, account: &PlayerAccount, now: i64) -> Vec<(String, ChestState)> {
        account.chests.status(now)
    }

    pub fn enter_tournament(
        &self,
        account: &mut PlayerAccount,
        id: &str,
        now: i64,
    ) -> Result<TournamentEntry, ClaimError> {
        refused(
            "tournament entry",
            self.config
                .tournaments()
                .enter(id, now, &mut account.resources, &mut account.tournaments),
        )
    }

    pub fn claim_tournament(
        &self,
        account: &mut PlayerAccount,
        snapshot: &PlayerProgressSnapshot,
        id: &str,
        now: i64,
    ) -> EngineResult<RewardOutcome> {
        let def = refused(
            "tournament claim",
            self.config
                .tournaments()
                .finish(id, now, &mut account.tournaments),
        )?;
        Ok(self.grant(def.name.clone(), &def.prize, account, snapshot)?)
    }

    pub fn upgrade_cost(&self, level: u32, rarity: &str) -> u64 {
        self.config.cost_curve().upgrade_cost(level, rarity)
    }
}
