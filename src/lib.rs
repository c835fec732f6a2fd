// In: src/lib.rs

//! Spirit Collectors Battle Engine
//!
//! Turn-based battles between parties of collectible creatures: type-chart
//! damage, capture rolls, experience and evolution, plus the party, inventory
//! and save bookkeeping around them. Static data is compiled into the binary
//! by the build script.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod constants;
pub mod data;
pub mod encounter;
pub mod errors;
pub mod inventory;
pub mod monster;
pub mod party;
pub mod progression;
pub mod rng;
pub mod save;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    BaseStats, EncounterEntry, EncounterZone, ItemCategory, ItemData, ItemEffect, MonsterSpecies,
    MonsterType, MoveCategory, MoveData, Rarity, TrainerData,
};

// --- From this crate's modules (`src/`) ---

// Battle engine and the records it hands back.
pub use battle::{
    ActionOutcome, BattleAction, BattleEngine, BattlePhase, BattleRewards, BattleType,
    CatchResult, Side, TurnResult, Winner,
};

// Runtime state around battles.
pub use data::GameData;
pub use inventory::{Inventory, InventoryError};
pub use monster::MonsterInst;
pub use party::{PartyError, PartyManager, StorageLocation};
pub use rng::GameRng;
pub use save::{SaveData, SaveError};

// Crate-specific error and result types.
pub use errors::{
    BattleEngineError, BattleResult, BattleStateError, DataLoadError, MoveDataError,
    MoveDataResult, SpeciesDataError, SpeciesDataResult,
};
