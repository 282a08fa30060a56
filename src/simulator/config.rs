//! Simulation configuration.

/// Which reward table to sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimTable {
    SpinWheel,
    TreasureHunt,
}

impl SimTable {
    pub fn name(&self) -> &'static str {
        match self {
            SimTable::SpinWheel => "spin_wheel",
            SimTable::TreasureHunt => "treasure_hunt",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "spin" | "spin_wheel" | "wheel" => Some(SimTable::SpinWheel),
            "treasure" | "treasure_hunt" | "hunt" => Some(SimTable::TreasureHunt),
            _ => None,
        }
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of draws to perform
    pub num_draws: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Table to draw from
    pub table: SimTable,

    /// Starting gold for the simulated player
    pub starting_gold: i64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_draws: 10_000,
            seed: None,
            table: SimTable::SpinWheel,
            starting_gold: 0,
        }
    }
}

impl SimConfig {
    /// Quick config for a reproducible distribution check
    pub fn seeded(table: SimTable, num_draws: u32, seed: u64) -> Self {
        Self {
            num_draws,
            seed: Some(seed),
            table,
            ..Default::default()
        }
    }
}
