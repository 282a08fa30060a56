//! Runs a table many times through the real resolver and tallies outcomes.

use super::config::{SimConfig, SimTable};
use super::report::{EntryStats, SimReport};
use crate::achievements::PlayerProgressSnapshot;
use crate::engine::{PlayerAccount, RewardEngine};
use crate::error::ConfigError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

/// Run the simulation and return a report.
///
/// Draws go through `RewardEngine` so clamping and chest handling match
/// gameplay. Achievements stay untouched because the snapshot never changes.
pub fn run_simulation(engine: &RewardEngine, config: &SimConfig) -> Result<SimReport, ConfigError> {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let table = match config.table {
        SimTable::SpinWheel => engine.config().spin_wheel(),
        SimTable::TreasureHunt => engine.config().treasure_hunt(),
    };

    let mut account = PlayerAccount::default();
    account.resources.gold = config.starting_gold;
    let snapshot = PlayerProgressSnapshot::default();

    let mut counts: HashMap<String, u32> = HashMap::new();
    let mut clamped_draws = 0;
    for _ in 0..config.num_draws {
        let entry = table.draw(&mut rng);
        *counts.entry(entry.id.clone()).or_insert(0) += 1;

        let outcome = engine.grant(entry.label.clone(), &entry.reward, &mut account, &snapshot)?;
        if entry.reward.gold.is_some_and(|g| g != outcome.reward.gold) {
            clamped_draws += 1;
        }
    }

    let draws = config.num_draws.max(1) as f64;
    let entries = table
        .entries()
        .iter()
        .map(|e| {
            let count = counts.get(&e.id).copied().unwrap_or(0);
            EntryStats {
                id: e.id.clone(),
                label: e.label.clone(),
                weight: e.weight,
                count,
                expected_share: e.weight as f64 / table.total_weight() as f64,
                observed_share: count as f64 / draws,
            }
        })
        .collect();

    Ok(SimReport {
        table: config.table.name().to_string(),
        num_draws: config.num_draws,
        seed: config.seed,
        entries,
        final_gold: account.resources.gold,
        final_gems: account.resources.gems,
        chests_won: account.chests.len() as u32,
        clamped_draws,
    })
}
