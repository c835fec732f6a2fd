//! Versioned save snapshots.
//!
//! Only the shape of a save lives here. Where the JSON ends up is the
//! caller's business.

use crate::inventory::Inventory;
use crate::party::PartyManager;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub const SAVE_VERSION: u32 = 3;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Malformed save data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Save data has no version field")]
    MissingVersion,
    #[error("Unsupported save version {0}")]
    UnsupportedVersion(u64),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Current save layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub version: u32,
    pub party: PartyManager,
    pub flags: BTreeMap<String, bool>,
    pub current_map: String,
    pub player_position: Position,
    pub inventory: Inventory,
}

/// Version 2 predates the inventory.
#[derive(Deserialize)]
struct SaveDataV2 {
    party: PartyManager,
    flags: BTreeMap<String, bool>,
    current_map: String,
    player_position: Position,
}

impl SaveData {
    pub fn new(
        party: PartyManager,
        flags: BTreeMap<String, bool>,
        current_map: impl Into<String>,
        player_position: Position,
        inventory: Inventory,
    ) -> Self {
        Self {
            version: SAVE_VERSION,
            party,
            flags,
            current_map: current_map.into(),
            player_position,
            inventory,
        }
    }

    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse any known save version, migrating it to the current layout.
    ///
    /// Version 1 saves are too old to migrate and come back as `Ok(None)`.
    pub fn from_json(json: &str) -> Result<Option<Self>, SaveError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let version = value
            .get("version")
            .and_then(serde_json::Value::as_u64)
            .ok_or(SaveError::MissingVersion)?;

        let mut save = match version {
            1 => {
                tracing::info!("discarding version 1 save");
                return Ok(None);
            }
            2 => {
                let old: SaveDataV2 = serde_json::from_value(value)?;
                tracing::info!("migrating version 2 save with an empty inventory");
                SaveData::new(
                    old.party,
                    old.flags,
                    old.current_map,
                    old.player_position,
                    Inventory::new(),
                )
            }
            3 => serde_json::from_value(value)?,
            other => return Err(SaveError::UnsupportedVersion(other)),
        };

        save.party.normalize_boxes();
        Ok(Some(save))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BOX_COUNT;
    use crate::data::GameData;
    use crate::monster::MonsterInst;
    use pretty_assertions::assert_eq;

    fn sample_save() -> SaveData {
        let data = GameData::builtin();
        let mut party = PartyManager::new();
        party
            .add_monster(MonsterInst::new(1, 12, data).unwrap().with_nickname("Sparky"))
            .unwrap();
        party.add_monster(MonsterInst::new(4, 8, data).unwrap()).unwrap();

        let mut inventory = Inventory::new();
        inventory.add_gold(250);
        inventory.add_item(1, 3);

        let mut flags = BTreeMap::new();
        flags.insert("met_professor".to_string(), true);

        SaveData::new(party, flags, "route_1", Position { x: 4, y: 9 }, inventory)
    }

    #[test]
    fn test_current_version_survives_json() {
        let save = sample_save();
        let json = save.to_json().unwrap();
        let loaded = SaveData::from_json(&json).unwrap().unwrap();
        assert_eq!(loaded, save);
    }

    #[test]
    fn test_version_two_gets_empty_inventory() {
        let mut value = serde_json::to_value(sample_save()).unwrap();
        let object = value.as_object_mut().unwrap();
        object.remove("inventory");
        object.insert("version".to_string(), serde_json::json!(2));

        let loaded = SaveData::from_json(&value.to_string()).unwrap().unwrap();
        assert_eq!(loaded.version, SAVE_VERSION);
        assert_eq!(loaded.inventory, Inventory::new());
        assert_eq!(loaded.current_map, "route_1");
        assert_eq!(loaded.party.party.len(), 2);
    }

    #[test]
    fn test_version_one_is_discarded() {
        let json = r#"{"version": 1, "party": {"party": [], "boxes": []}}"#;
        assert!(SaveData::from_json(json).unwrap().is_none());
    }

    #[test]
    fn test_unknown_version_is_an_error() {
        let json = r#"{"version": 9}"#;
        assert!(matches!(
            SaveData::from_json(json),
            Err(SaveError::UnsupportedVersion(9))
        ));
        assert!(matches!(
            SaveData::from_json("{}"),
            Err(SaveError::MissingVersion)
        ));
        assert!(matches!(
            SaveData::from_json("not json"),
            Err(SaveError::Json(_))
        ));
    }

    #[test]
    fn test_missing_boxes_are_padded_on_load() {
        let mut value = serde_json::to_value(sample_save()).unwrap();
        value["party"]["boxes"] = serde_json::json!([[null, null]]);

        let loaded = SaveData::from_json(&value.to_string()).unwrap().unwrap();
        assert_eq!(loaded.party.boxes.len(), BOX_COUNT);
    }
}
