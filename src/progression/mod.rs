//! Time-gated progression rewards: daily login track and tournaments.

pub mod daily;
pub mod tournament;

pub use daily::{DailyClaim, DailyRewardState, DailyRewardTrack};
pub use tournament::{TournamentBook, TournamentDef, TournamentEntry};
