//! Chest types and the player's chest slots.

pub mod logic;
pub mod types;

pub use logic::{ChestInventory, ChestQueue, ChestState, QueuedChest};
pub use types::{ChestCatalog, ChestContents, ChestType};
