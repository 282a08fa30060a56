//! Reward payloads, weighted tables and the resolver that applies them.

pub mod resolver;
pub mod table;
pub mod types;

pub use resolver::RewardResolver;
pub use table::{draw, RewardEntry, RewardTable};
pub use types::{AppliedRewardSummary, ChestUnlockRequest, PlayerResources, Resource, RewardPayload};
