//! Card upgrade cost curve.

use super::constants::{
    COMMON_RARITY, COST_CURVE_MULTIPLIER_DEN, COST_CURVE_MULTIPLIER_NUM, DEFAULT_COMMON_BASE_COST,
    DEFAULT_EPIC_BASE_COST, DEFAULT_LEGENDARY_BASE_COST, DEFAULT_RARE_BASE_COST,
};
use crate::error::ConfigError;
use std::collections::HashMap;

/// Per-rarity base costs. Always contains a positive `common` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostCurve {
    bases: HashMap<String, u64>,
}

impl Default for CostCurve {
    fn default() -> Self {
        let bases = HashMap::from([
            (COMMON_RARITY.to_string(), DEFAULT_COMMON_BASE_COST),
            ("rare".to_string(), DEFAULT_RARE_BASE_COST),
            ("epic".to_string(), DEFAULT_EPIC_BASE_COST),
            ("legendary".to_string(), DEFAULT_LEGENDARY_BASE_COST),
        ]);
        Self { bases }
    }
}

impl CostCurve {
    /// Build a curve from a rarity -> base table.
    ///
    /// Every base must be positive and a `common` base must exist, since it
    /// is the fallback for unknown rarities.
    pub fn new(bases: HashMap<String, u64>) -> Result<Self, ConfigError> {
        if let Some((rarity, _)) = bases.iter().find(|(_, base)| **base == 0) {
            return Err(ConfigError::InvalidCostBase {
                rarity: rarity.clone(),
            });
        }
        if !bases.contains_key(COMMON_RARITY) {
            return Err(ConfigError::MissingCommonBase);
        }
        Ok(Self { bases })
    }

    /// Base cost for a rarity. Unknown rarities use the `common` base.
    pub fn base_for_rarity(&self, rarity: &str) -> u64 {
        self.bases
            .get(rarity)
            .or_else(|| self.bases.get(COMMON_RARITY))
            .copied()
            .unwrap_or(DEFAULT_COMMON_BASE_COST)
    }

    /// Cost of upgrading a card of `rarity` from `level`.
    ///
    /// `floor(base * level * 1.5)`, computed in integers.
    pub fn upgrade_cost(&self, level: u32, rarity: &str) -> u64 {
        let base = self.base_for_rarity(rarity);
        base.saturating_mul(level as u64)
            .saturating_mul(COST_CURVE_MULTIPLIER_NUM)
            / COST_CURVE_MULTIPLIER_DEN
    }

    pub fn rarities(&self) -> impl Iterator<Item = &str> {
        self.bases.keys().map(String::as_str)
    }
}

/// Upgrade cost using the default rarity table.
pub fn upgrade_cost(level: u32, rarity: &str) -> u64 {
    CostCurve::default().upgrade_cost(level, rarity)
}
