//! Timed tournaments: pay an entry fee in gems, claim the prize when the
//! tournament clock runs out.

use crate::core::timer::CooldownTimer;
use crate::error::{ClaimError, ConfigError};
use crate::rewards::{PlayerResources, RewardPayload};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub entry_fee_gems: u32,
    pub duration_ms: u64,
    #[serde(default)]
    pub prize: RewardPayload,
}

/// A tournament the player has joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentEntry {
    pub tournament_id: String,
    pub timer: CooldownTimer,
}

/// Validated tournament list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TournamentBook {
    tournaments: Vec<TournamentDef>,
}

impl TournamentBook {
    pub fn new(tournaments: Vec<TournamentDef>) -> Result<Self, ConfigError> {
        for (i, t) in tournaments.iter().enumerate() {
            if tournaments[..i].iter().any(|other| other.id == t.id) {
                return Err(ConfigError::DuplicateTournament { id: t.id.clone() });
            }
        }
        Ok(Self { tournaments })
    }

    pub fn get(&self, id: &str) -> Option<&TournamentDef> {
        self.tournaments.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TournamentDef> {
        self.tournaments.iter()
    }

    fn require(&self, id: &str) -> Result<&TournamentDef, ClaimError> {
        self.get(id).ok_or_else(|| ClaimError::UnknownTournament { id: id.to_string() })
    }

    /// Join a tournament, deducting the gem fee.
    pub fn enter(
        &self,
        id: &str,
        now: i64,
        resources: &mut PlayerResources,
        entries: &mut Vec<TournamentEntry>,
    ) -> Result<TournamentEntry, ClaimError> {
        let def = self.require(id)?;
        if entries.iter().any(|e| e.tournament_id == id) {
            return Err(ClaimError::AlreadyEntered { id: id.to_string() });
        }
        let fee = def.entry_fee_gems as i64;
        if resources.gems < fee {
            return Err(ClaimError::InsufficientGems {
                have: resources.gems,
                need: fee,
            });
        }
        resources.gems -= fee;
        let entry = TournamentEntry {
            tournament_id: def.id.clone(),
            timer: CooldownTimer::new(now, def.duration_ms),
        };
        entries.push(entry.clone());
        log::debug!("entered tournament '{}' for {} gems", def.id, fee);
        Ok(entry)
    }

    /// Close out a finished tournament, returning its definition so the
    /// caller can pay the prize.
    pub fn finish(
        &self,
        id: &str,
        now: i64,
        entries: &mut Vec<TournamentEntry>,
    ) -> Result<&TournamentDef, ClaimError> {
        let def = self.require(id)?;
        let index = entries
            .iter()
            .position(|e| e.tournament_id == id)
            .ok_or_else(|| ClaimError::NotEntered { id: id.to_string() })?;
        let remaining_ms = entries[index].timer.remaining(now);
        if remaining_ms > 0 {
            return Err(ClaimError::TournamentInProgress {
                id: id.to_string(),
                remaining_ms,
            });
        }
        entries.remove(index);
        Ok(def)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewards::Resource;

    fn book() -> TournamentBook {
        TournamentBook::new(vec![
            TournamentDef {
                id: "weekend".to_string(),
                name: "Weekend Cup".to_string(),
                entry_fee_gems: 10,
                duration_ms: 60_000,
                prize: RewardPayload::new()
                    .with(Resource::Gold, 1_000)
                    .with_chest("golden"),
            },
            TournamentDef {
                id: "open".to_string(),
                name: "Open Arena".to_string(),
                entry_fee_gems: 0,
                duration_ms: 1_000,
                prize: RewardPayload::new().with(Resource::Gold, 50),
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_duplicate_tournament_rejected() {
        let mut defs: Vec<TournamentDef> = book().iter().cloned().collect();
        defs.push(defs[0].clone());
        assert!(matches!(
            TournamentBook::new(defs),
            Err(ConfigError::DuplicateTournament { id }) if id == "weekend"
        ));
    }

    #[test]
    fn test_enter_deducts_fee() {
        let mut resources = PlayerResources {
            gems: 25,
            ..Default::default()
        };
        let mut entries = Vec::new();
        let entry = book().enter("weekend", 0, &mut resources, &mut entries).unwrap();
        assert_eq!(resources.gems, 15);
        assert_eq!(entry.timer.duration_ms, 60_000);
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_enter_refusals() {
        let book = book();
        let mut resources = PlayerResources {
            gems: 5,
            ..Default::default()
        };
        let mut entries = Vec::new();

        assert_eq!(
            book.enter("weekend", 0, &mut resources, &mut entries),
            Err(ClaimError::InsufficientGems { have: 5, need: 10 })
        );
        assert_eq!(
            book.enter("nope", 0, &mut resources, &mut entries),
            Err(ClaimError::UnknownTournament {
                id: "nope".to_string()
            })
        );
        book.enter("open", 0, &mut resources, &mut entries).unwrap();
        assert_eq!(
            book.enter("open", 10, &mut resources, &mut entries),
            Err(ClaimError::AlreadyEntered {
                id: "open".to_string()
            })
        );
        assert_eq!(resources.gems, 5);
    }

    #[test]
    fn test_finish_after_timer() {
        let book = book();
        let mut resources = PlayerResources::default();
        let mut entries = Vec::new();
        book.enter("open", 0, &mut resources, &mut entries).unwrap();

        assert_eq!(
            book.finish("open", 400, &mut entries).map(|d| d.id.clone()),
            Err(ClaimError::TournamentInProgress {
                id: "open".to_string(),
                remaining_ms: 600
            })
        );
        let def = book.finish("open", 1_000, &mut entries).unwrap();
        assert_eq!(def.prize.gold, Some(50));
        assert!(entries.is_empty());
        assert_eq!(
            book.finish("open", 2_000, &mut entries).map(|d| d.id.clone()),
            Err(ClaimError::NotEntered {
                id: "open".to_string()
            })
        );
    }
}
