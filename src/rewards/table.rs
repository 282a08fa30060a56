//! Weighted reward tables (spin wheel, treasure hunt).

use super::types::RewardPayload;
use crate::error::ConfigError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One outcome of a reward table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardEntry {
    pub id: String,
    #[serde(default)]
    pub label: String,
    /// Relative weight. Must be positive; tables do not need to sum to 100.
    pub weight: i64,
    #[serde(default)]
    pub reward: RewardPayload,
}

impl RewardEntry {
    pub fn new(id: impl Into<String>, weight: i64, reward: RewardPayload) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            weight,
            reward,
        }
    }
}

/// A validated, immutable weighted table.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardTable {
    name: String,
    entries: Vec<RewardEntry>,
    total_weight: u64,
}

impl RewardTable {
    /// Validate and freeze a table. Fails on an empty table, any weight
    /// that is zero or negative, or weights whose total overflows `u64`.
    ///
    /// Entries without a label are labelled with their id.
    pub fn new(name: impl Into<String>, mut entries: Vec<RewardEntry>) -> Result<Self, ConfigError> {
        let name = name.into();
        if entries.is_empty() {
            return Err(ConfigError::InvalidTable { table: name });
        }
        if let Some(bad) = entries.iter().find(|e| e.weight <= 0) {
            return Err(ConfigError::InvalidWeight {
                table: name,
                entry: bad.id.clone(),
                weight: bad.weight,
            });
        }
        let total_weight = entries
            .iter()
            .try_fold(0u64, |total, e| total.checked_add(e.weight as u64))
            .ok_or_else(|| ConfigError::WeightOverflow { table: name.clone() })?;
        for entry in entries.iter_mut().filter(|e| e.label.is_empty()) {
            entry.label = entry.id.clone();
        }
        Ok(Self {
            name,
            entries,
            total_weight,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[RewardEntry] {
        &self.entries
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Expected share of draws for an entry id, in `[0, 1]`.
    pub fn probability(&self, id: &str) -> f64 {
        let weight: u64 = self
            .entries
            .iter()
            .filter(|e| e.id == id)
            .map(|e| e.weight as u64)
            .sum();
        weight as f64 / self.total_weight as f64
    }

    /// Draw one entry using a uniform source in `[0, 1)`.
    ///
    /// `r = rng() * total`; the result is the first entry whose cumulative
    /// weight is strictly greater than `r`, so earlier entries win ties at a
    /// boundary.
    pub fn draw_with<F: FnMut() -> f64>(&self, mut rng: F) -> &RewardEntry {
        let roll = rng() * self.total_weight as f64;
        let mut cumulative = 0u64;
        for entry in &self.entries {
            cumulative += entry.weight as u64;
            if cumulative as f64 > roll {
                log::debug!("{} drew '{}' (roll {:.3})", self.name, entry.id, roll);
                return entry;
            }
        }
        // Only reachable when rounding pushes the roll up to the total
        let last = &self.entries[self.entries.len() - 1];
        log::debug!("{} drew '{}' (roll {:.3}, clamped)", self.name, last.id, roll);
        last
    }

    /// Draw one entry from a `rand` generator.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> &RewardEntry {
        self.draw_with(|| rng.gen::<f64>())
    }
}

/// Free-function form of [`RewardTable::draw_with`].
pub fn draw<F: FnMut() -> f64>(table: &RewardTable, rng: F) -> &RewardEntry {
    table.draw_with(rng)
}
