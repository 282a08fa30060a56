//! Applies reward payloads to a player's resource totals.

use super::types::{
    AppliedRewardSummary, ChestUnlockRequest, PlayerResources, Resource, RewardPayload,
};
use crate::chests::{ChestCatalog, ChestInventory};
use crate::error::ConfigError;
use std::collections::HashSet;

/// Interprets the resource keys of a payload. Effect keys are passed through
/// to the summary for whoever runs boosts.
#[derive(Debug, Clone)]
pub struct RewardResolver {
    chest_types: HashSet<String>,
}

impl RewardResolver {
    pub fn new(catalog: &ChestCatalog) -> Self {
        Self {
            chest_types: catalog.iter().map(|c| c.id.clone()).collect(),
        }
    }

    /// Check a payload without applying it.
    pub fn validate(&self, payload: &RewardPayload) -> Result<(), ConfigError> {
        match &payload.chest {
            Some(chest) if !self.chest_types.contains(chest) => Err(ConfigError::UnknownChestType {
                chest: chest.clone(),
            }),
            _ => Ok(()),
        }
    }

    /// Apply `payload` to `resources`, sending any chest to `chests`.
    ///
    /// The payload is validated before anything changes, so an unknown chest
    /// type leaves the player untouched. Gold is floored at zero after the
    /// delta is added.
    pub fn apply<C: ChestInventory + ?Sized>(
        &self,
        payload: &RewardPayload,
        resources: &mut PlayerResources,
        chests: &mut C,
    ) -> Result<AppliedRewardSummary, ConfigError> {
        self.validate(payload)?;

        let mut summary = AppliedRewardSummary::default();
        for resource in Resource::ALL {
            let Some(delta) = payload.amount(resource) else {
                continue;
            };
            let total = resources.get_mut(resource);
            let before = *total;
            let mut after = before.saturating_add(delta);
            if resource == Resource::Gold {
                after = after.max(0);
            }
            *total = after;
            summary.set_delta(resource, after.saturating_sub(before));
        }

        if let Some(chest) = &payload.chest {
            chests.enqueue_unlock(ChestUnlockRequest {
                chest_type: chest.clone(),
            });
            summary.chest = Some(chest.clone());
        }

        summary.effects = payload.effects.clone();
        log::debug!("applied reward: {:?}", summary.lines());
        Ok(summary)
    }
}
