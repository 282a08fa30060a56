//! Chest inventory: queued chests, unlock timers and opening.

use super::types::{ChestCatalog, ChestContents};
use crate::core::timer::{describe, CooldownTimer};
use crate::error::{ClaimError, EngineResult};
use crate::rewards::types::ChestUnlockRequest;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Receiver for chests granted by rewards. The resolver has already checked
/// the chest type against the catalog.
pub trait ChestInventory {
    fn enqueue_unlock(&mut self, request: ChestUnlockRequest);
}

/// A chest waiting in the player's slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedChest {
    pub chest_type: String,
    /// Set once the player starts unlocking it.
    pub unlock: Option<CooldownTimer>,
}

/// Display state of a queued chest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChestState {
    Locked,
    Unlocking { remaining: String },
    Ready,
}

/// In-memory chest inventory. Only one chest unlocks at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChestQueue {
    chests: Vec<QueuedChest>,
}

impl ChestInventory for ChestQueue {
    fn enqueue_unlock(&mut self, request: ChestUnlockRequest) {
        log::debug!("queued chest '{}'", request.chest_type);
        self.chests.push(QueuedChest {
            chest_type: request.chest_type,
            unlock: None,
        });
    }
}

impl ChestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.chests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chests.is_empty()
    }

    pub fn chests(&self) -> &[QueuedChest] {
        &self.chests
    }

    /// Timer of the chest currently counting down, if any.
    fn active_unlock(&self, now: i64) -> Option<(usize, CooldownTimer)> {
        self.chests.iter().enumerate().find_map(|(i, c)| match c.unlock {
            Some(timer) if !timer.is_ready(now) => Some((i, timer)),
            _ => None,
        })
    }

    /// Start the unlock timer on the chest in slot `index`.
    ///
    /// Starting a chest that is already unlocking returns its existing timer.
    pub fn start_unlock(
        &mut self,
        index: usize,
        now: i64,
        catalog: &ChestCatalog,
    ) -> EngineResult<CooldownTimer> {
        let chest = self
            .chests
            .get(index)
            .ok_or(ClaimError::NoSuchChest { index })?;
        if let Some(timer) = chest.unlock {
            return Ok(timer);
        }
        if let Some((_, timer)) = self.active_unlock(now) {
            return Err(ClaimError::UnlockInProgress {
                remaining_ms: timer.remaining(now),
            }
            .into());
        }
        let duration = catalog.require(&chest.chest_type)?.unlock_duration_ms;
        let timer = CooldownTimer::new(now, duration);
        self.chests[index].unlock = Some(timer);
        Ok(timer)
    }

    /// Open the chest in slot `index` and roll its contents.
    ///
    /// Chests with a zero unlock duration open without being started.
    pub fn open<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        now: i64,
        catalog: &ChestCatalog,
        rng: &mut R,
    ) -> EngineResult<ChestContents> {
        let chest = self
            .chests
            .get(index)
            .ok_or(ClaimError::NoSuchChest { index })?;
        let chest_type = catalog.require(&chest.chest_type)?;
        let remaining_ms = match chest.unlock {
            Some(timer) => timer.remaining(now),
            None => chest_type.unlock_duration_ms,
        };
        if remaining_ms > 0 {
            return Err(ClaimError::ChestLocked { remaining_ms }.into());
        }

        let gold = rng.gen_range(chest_type.gold_min..=chest_type.gold_max);
        let contents = ChestContents {
            chest_type: chest_type.id.clone(),
            gold,
            card_count: chest_type.cards,
        };
        self.chests.remove(index);
        log::debug!(
            "opened '{}': {} gold, {} cards",
            contents.chest_type,
            contents.gold,
            contents.card_count
        );
        Ok(contents)
    }

    pub fn state(&self, index: usize, now: i64) -> Option<ChestState> {
        let chest = self.chests.get(index)?;
        Some(match chest.unlock {
            None => ChestState::Locked,
            Some(timer) if timer.is_ready(now) => ChestState::Ready,
            Some(timer) => ChestState::Unlocking {
                remaining: describe(timer.remaining(now)),
            },
        })
    }

    /// State of every slot, in order.
    pub fn status(&self, now: i64) -> Vec<(String, ChestState)> {
        (0..self.chests.len())
            .filter_map(|i| {
                self.state(i, now)
                    .map(|s| (self.chests[i].chest_type.clone(), s))
            })
            .collect()
    }
}
