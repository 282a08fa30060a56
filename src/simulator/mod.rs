//! Monte Carlo checks for reward tables.
//!
//! Draw thousands of times from a table to compare observed outcome shares
//! with the configured weights and to see where the economy drifts.

mod config;
mod report;
mod runner;

pub use config::{SimConfig, SimTable};
pub use report::{EntryStats, SimReport};
pub use runner::run_simulation;
