use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// A chest type from the content tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChestType {
    pub id: String,
    pub name: String,
    pub unlock_duration_ms: u64,
    pub gold_min: u64,
    pub gold_max: u64,
    /// Number of cards handed to the card collection on open.
    pub cards: u32,
}

/// Validated set of chest types, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChestCatalog {
    types: Vec<ChestType>,
}

impl ChestCatalog {
    /// Rejects duplicate ids and inverted gold ranges.
    pub fn new(types: Vec<ChestType>) -> Result<Self, ConfigError> {
        for (i, chest) in types.iter().enumerate() {
            if types[..i].iter().any(|other| other.id == chest.id) {
                return Err(ConfigError::DuplicateChestType {
                    id: chest.id.clone(),
                });
            }
            if chest.gold_min > chest.gold_max {
                return Err(ConfigError::InvalidChestRange {
                    id: chest.id.clone(),
                    min: chest.gold_min,
                    max: chest.gold_max,
                });
            }
        }
        Ok(Self { types })
    }

    pub fn get(&self, id: &str) -> Option<&ChestType> {
        self.types.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Look up a chest type, failing with `UnknownChestType`.
    pub fn require(&self, id: &str) -> Result<&ChestType, ConfigError> {
        self.get(id).ok_or_else(|| ConfigError::UnknownChestType {
            chest: id.to_string(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChestType> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// What opening a chest produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChestContents {
    pub chest_type: String,
    pub gold: u64,
    pub card_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chest(id: &str, min: u64, max: u64) -> ChestType {
        ChestType {
            id: id.to_string(),
            name: id.to_string(),
            unlock_duration_ms: 1_000,
            gold_min: min,
            gold_max: max,
            cards: 3,
        }
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = ChestCatalog::new(vec![chest("wooden", 10, 20), chest("silver", 50, 80)]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("silver"));
        assert!(!catalog.contains("golden"));
        assert_eq!(catalog.require("wooden").unwrap().gold_max, 20);
    }

    #[test]
    fn test_require_unknown_chest() {
        let catalog = ChestCatalog::new(vec![chest("wooden", 10, 20)]).unwrap();
        assert!(matches!(
            catalog.require("magic"),
            Err(ConfigError::UnknownChestType { chest }) if chest == "magic"
        ));
    }

    #[test]
    fn test_duplicate_chest_rejected() {
        let result = ChestCatalog::new(vec![chest("wooden", 1, 2), chest("wooden", 3, 4)]);
        assert!(matches!(result, Err(ConfigError::DuplicateChestType { id }) if id == "wooden"));
    }

    #[test]
    fn test_inverted_gold_range_rejected() {
        let result = ChestCatalog::new(vec![chest("broken", 50, 10)]);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidChestRange { min: 50, max: 10, .. })
        ));
    }
}
