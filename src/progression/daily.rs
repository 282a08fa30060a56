//! Daily login rewards with a streak that cycles through the reward track.

use crate::core::constants::{DAILY_CLAIM_COOLDOWN_MS, DAILY_STREAK_GRACE_MS};
use crate::core::timer::CooldownTimer;
use crate::error::{ClaimError, ConfigError};
use crate::rewards::RewardPayload;
use serde::{Deserialize, Serialize};

/// Per-player daily reward state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRewardState {
    /// Consecutive days claimed.
    pub streak: u32,
    pub last_claimed_at_ms: Option<i64>,
}

/// A claimed daily reward.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyClaim<'a> {
    /// 1-based day on the track.
    pub day: usize,
    pub streak: u32,
    pub reward: &'a RewardPayload,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyRewardTrack {
    rewards: Vec<RewardPayload>,
    cooldown_ms: u64,
    grace_ms: u64,
}

impl DailyRewardTrack {
    pub fn new(rewards: Vec<RewardPayload>) -> Result<Self, ConfigError> {
        if rewards.is_empty() {
            return Err(ConfigError::InvalidTable {
                table: "daily_rewards".to_string(),
            });
        }
        Ok(Self {
            rewards,
            cooldown_ms: DAILY_CLAIM_COOLDOWN_MS,
            grace_ms: DAILY_STREAK_GRACE_MS,
        })
    }

    pub fn rewards(&self) -> &[RewardPayload] {
        &self.rewards
    }

    /// Cooldown started by the last claim, if there was one.
    pub fn cooldown(&self, state: &DailyRewardState) -> Option<CooldownTimer> {
        state
            .last_claimed_at_ms
            .map(|at| CooldownTimer::new(at, self.cooldown_ms))
    }

    /// Milliseconds until the next claim is allowed.
    pub fn remaining(&self, state: &DailyRewardState, now: i64) -> u64 {
        self.cooldown(state).map_or(0, |t| t.remaining(now))
    }

    fn streak_broken(&self, state: &DailyRewardState, now: i64) -> bool {
        match state.last_claimed_at_ms {
            Some(at) => now.saturating_sub(at) > self.grace_ms as i64,
            None => false,
        }
    }

    /// 0-based track index the next claim would pay out.
    pub fn next_index(&self, state: &DailyRewardState, now: i64) -> usize {
        let streak = if self.streak_broken(state, now) {
            0
        } else {
            state.streak
        };
        streak as usize % self.rewards.len()
    }

    /// Claim today's reward, advancing the streak.
    pub fn claim(
        &self,
        state: &mut DailyRewardState,
        now: i64,
    ) -> Result<DailyClaim<'_>, ClaimError> {
        let remaining_ms = self.remaining(state, now);
        if remaining_ms > 0 {
            return Err(ClaimError::DailyNotReady { remaining_ms });
        }
        if self.streak_broken(state, now) {
            log::debug!("daily streak of {} reset", state.streak);
            state.streak = 0;
        }
        let index = state.streak as usize % self.rewards.len();
        state.streak += 1;
        state.last_claimed_at_ms = Some(now);
        Ok(DailyClaim {
            day: index + 1,
            streak: state.streak,
            reward: &self.rewards[index],
        })
    }
}
