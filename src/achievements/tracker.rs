//! Detects newly completed achievements and challenges.

use super::types::{AchievementDefinition, CompletionStore, PlayerProgressSnapshot};
use crate::error::ConfigError;

/// Validated achievement and challenge definitions. Ids are unique across
/// both kinds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AchievementTracker {
    definitions: Vec<AchievementDefinition>,
}

impl AchievementTracker {
    pub fn new(definitions: Vec<AchievementDefinition>) -> Result<Self, ConfigError> {
        for (i, def) in definitions.iter().enumerate() {
            if definitions[..i].iter().any(|other| other.id == def.id) {
                return Err(ConfigError::DuplicateAchievementId { id: def.id.clone() });
            }
        }
        Ok(Self { definitions })
    }

    pub fn definitions(&self) -> &[AchievementDefinition] {
        &self.definitions
    }

    pub fn get(&self, id: &str) -> Option<&AchievementDefinition> {
        self.definitions.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Lazily yield definitions that are met and not yet completed, marking
    /// each one complete as it is yielded.
    pub fn evaluate<'d, 's, S: CompletionStore + ?Sized>(
        &'d self,
        snapshot: &'s PlayerProgressSnapshot,
        completed: &'s mut S,
    ) -> NewlyCompleted<'d, 's, S> {
        evaluate(snapshot, &self.definitions, completed)
    }

    /// `(current, target)` progress for one definition.
    pub fn progress(&self, id: &str, snapshot: &PlayerProgressSnapshot) -> Option<(u64, u64)> {
        self.get(id).map(|d| d.requirement.progress(snapshot))
    }
}

/// Iterator returned by [`evaluate`]. Dropping it early leaves the remaining
/// definitions unchecked and unmarked.
pub struct NewlyCompleted<'d, 's, S: CompletionStore + ?Sized> {
    definitions: std::slice::Iter<'d, AchievementDefinition>,
    snapshot: &'s PlayerProgressSnapshot,
    completed: &'s mut S,
}

impl<'d, S: CompletionStore + ?Sized> Iterator for NewlyCompleted<'d, '_, S> {
    type Item = &'d AchievementDefinition;

    fn next(&mut self) -> Option<Self::Item> {
        for def in self.definitions.by_ref() {
            if self.completed.is_completed(&def.id) || !def.is_met(self.snapshot) {
                continue;
            }
            self.completed.mark_completed(&def.id);
            log::info!("{} completed: {}", def.kind.name(), def.id);
            return Some(def);
        }
        None
    }
}

/// Walk `definitions` in order against `snapshot`, yielding and marking those
/// newly satisfied.
pub fn evaluate<'d, 's, S: CompletionStore + ?Sized>(
    snapshot: &'s PlayerProgressSnapshot,
    definitions: &'d [AchievementDefinition],
    completed: &'s mut S,
) -> NewlyCompleted<'d, 's, S> {
    NewlyCompleted {
        definitions: definitions.iter(),
        snapshot,
        completed,
    }
}
