//! Error types.
//!
//! `ConfigError` covers malformed content tables and is raised while loading
//! or constructing engine components, never during a draw. `ClaimError` is a
//! gameplay refusal (chest still locked, not enough gems, ...).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reward table '{table}' has no entries")]
    InvalidTable { table: String },
    #[error("reward table '{table}' entry '{entry}' has non-positive weight {weight}")]
    InvalidWeight {
        table: String,
        entry: String,
        weight: i64,
    },
    #[error("reward table '{table}' total weight overflows")]
    WeightOverflow { table: String },
    #[error("duplicate achievement id '{id}'")]
    DuplicateAchievementId { id: String },
    #[error("unknown chest type '{chest}'")]
    UnknownChestType { chest: String },
    #[error("duplicate chest type '{id}'")]
    DuplicateChestType { id: String },
    #[error("chest type '{id}' gold range invalid (min {min} > max {max})")]
    InvalidChestRange { id: String, min: u64, max: u64 },
    #[error("duplicate tournament id '{id}'")]
    DuplicateTournament { id: String },
    #[error("cost curve is missing the 'common' base")]
    MissingCommonBase,
    #[error("cost curve base for '{rarity}' must be positive")]
    InvalidCostBase { rarity: String },
    #[error("failed to parse reward config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read reward config: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("no chest in slot {index}")]
    NoSuchChest { index: usize },
    #[error("chest still locked for {remaining_ms} ms")]
    ChestLocked { remaining_ms: u64 },
    #[error("another chest is unlocking ({remaining_ms} ms left)")]
    UnlockInProgress { remaining_ms: u64 },
    #[error("daily reward available again in {remaining_ms} ms")]
    DailyNotReady { remaining_ms: u64 },
    #[error("not enough gems: have {have}, need {need}")]
    InsufficientGems { have: i64, need: i64 },
    #[error("unknown tournament '{id}'")]
    UnknownTournament { id: String },
    #[error("already entered tournament '{id}'")]
    AlreadyEntered { id: String },
    #[error("tournament '{id}' ends in {remaining_ms} ms")]
    TournamentInProgress { id: String, remaining_ms: u64 },
    #[error("not entered in tournament '{id}'")]
    NotEntered { id: String },
}

/// Failure of an engine operation.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Claim(#[from] ClaimError),
}

pub type EngineResult<T> = Result<T, EngineError>;
