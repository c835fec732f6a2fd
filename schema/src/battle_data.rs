use serde::{Deserialize, Serialize};

/// One weighted species slot of an encounter zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EncounterEntry {
    pub species_id: u16,
    pub min_level: u8,
    pub max_level: u8,
    pub weight: u32,
}

/// Wild encounter table for a region of the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterZone {
    /// Chance per step in tall grass, 0.0-1.0
    pub encounter_rate: f64,
    pub pool: Vec<EncounterEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerPartyEntry {
    pub species_id: u16,
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemReward {
    pub item_id: u16,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerData {
    pub name: String,
    pub party: Vec<TrainerPartyEntry>,
    /// Story flag set once this trainer is beaten
    pub defeat_flag: String,
    pub rewards: Vec<ItemReward>,
}
