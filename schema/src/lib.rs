// Spirit Collectors Schema - Shared type definitions
// This crate contains the static data records that are shared between
// the main spirit-collectors crate and its build script, so the build script
// can validate the RON data and compile it with postcard.

// Re-export the main types
pub use battle_data::*;
pub use item_data::*;
pub use monster_types::*;
pub use move_types::*;
pub use species_data::*;

pub mod battle_data;
pub mod item_data;
pub mod monster_types;
pub mod move_types;
pub mod species_data;
pub mod validation;

pub use validation::validate_catalog;
