//! Static species, move and item databases.
//!
//! The builtin databases are compiled from `data/*.ron` by the build script
//! and decoded once on first use. Callers that want their own content can load
//! a directory of RON files or hand in vectors directly.

use crate::errors::{
    DataLoadError, MoveDataError, MoveDataResult, SpeciesDataError, SpeciesDataResult,
};
use crate::rng::GameRng;
use schema::{validate_catalog, ItemData, MonsterSpecies, MoveData};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

// COMPILED_* blobs and the SPECIES_IDS / MOVE_IDS maps
include!(concat!(env!("OUT_DIR"), "/generated_data.rs"));

static BUILTIN: LazyLock<GameData> = LazyLock::new(|| match GameData::from_compiled() {
    Ok(data) => data,
    Err(err) => panic!("Compiled game data could not be decoded: {}", err),
});

#[derive(Debug, Clone, Default)]
pub struct GameData {
    species: Vec<MonsterSpecies>,
    moves: Vec<MoveData>,
    items: Vec<ItemData>,
    species_index: HashMap<u16, usize>,
    move_index: HashMap<u16, usize>,
    item_index: HashMap<u16, usize>,
}

impl GameData {
    pub fn new(species: Vec<MonsterSpecies>, moves: Vec<MoveData>, items: Vec<ItemData>) -> Self {
        let species_index = species.iter().enumerate().map(|(i, s)| (s.id, i)).collect();
        let move_index = moves.iter().enumerate().map(|(i, m)| (m.id, i)).collect();
        let item_index = items.iter().enumerate().map(|(i, it)| (it.id, i)).collect();
        Self {
            species,
            moves,
            items,
            species_index,
            move_index,
            item_index,
        }
    }

    /// The databases baked into the binary at build time.
    pub fn builtin() -> &'static GameData {
        &BUILTIN
    }

    /// Decode the postcard blobs produced by the build script.
    pub fn from_compiled() -> Result<Self, DataLoadError> {
        let species: Vec<MonsterSpecies> = postcard::from_bytes(COMPILED_SPECIES)?;
        let moves: Vec<MoveData> = postcard::from_bytes(COMPILED_MOVES)?;
        let items: Vec<ItemData> = postcard::from_bytes(COMPILED_ITEMS)?;
        Ok(Self::new(species, moves, items))
    }

    /// Load `monsters.ron`, `moves.ron` and `items.ron` from `dir` and validate them.
    pub fn load_from_dir(dir: &Path) -> Result<Self, DataLoadError> {
        let species = load_ron(&dir.join("monsters.ron"))?;
        let moves = load_ron(&dir.join("moves.ron"))?;
        let items = load_ron(&dir.join("items.ron"))?;
        let data = Self::new(species, moves, items);
        data.validate()?;
        tracing::info!(
            species = data.species.len(),
            moves = data.moves.len(),
            items = data.items.len(),
            dir = %dir.display(),
            "loaded game data"
        );
        Ok(data)
    }

    pub fn validate(&self) -> Result<(), DataLoadError> {
        let problems = validate_catalog(&self.species, &self.moves, &self.items);
        if problems.is_empty() {
            Ok(())
        } else {
            Err(DataLoadError::Invalid(problems))
        }
    }

    pub fn species(&self, id: u16) -> SpeciesDataResult<&MonsterSpecies> {
        self.species_index
            .get(&id)
            .map(|&i| &self.species[i])
            .ok_or(SpeciesDataError::SpeciesNotFound(id))
    }

    pub fn move_data(&self, id: u16) -> MoveDataResult<&MoveData> {
        self.move_index
            .get(&id)
            .map(|&i| &self.moves[i])
            .ok_or(MoveDataError::MoveNotFound(id))
    }

    pub fn item(&self, id: u16) -> Option<&ItemData> {
        self.item_index.get(&id).map(|&i| &self.items[i])
    }

    pub fn all_species(&self) -> &[MonsterSpecies] {
        &self.species
    }

    pub fn all_moves(&self) -> &[MoveData] {
        &self.moves
    }

    pub fn all_items(&self) -> &[ItemData] {
        &self.items
    }

    /// Uniformly pick a species, or `None` if the database is empty.
    pub fn random_species(&self, rng: &mut GameRng) -> Option<&MonsterSpecies> {
        if self.species.is_empty() {
            return None;
        }
        let index = rng.next_index(self.species.len(), "random species");
        self.species.get(index)
    }

    /// Resolve a builtin species by name, e.g. `"Emberpup"` or `"emberpup"`.
    pub fn builtin_species_id(name: &str) -> Option<u16> {
        SPECIES_IDS.get(lookup_key(name).as_str()).copied()
    }

    /// Resolve a builtin move by name, e.g. `"Flame Wheel"` or `"flame_wheel"`.
    pub fn builtin_move_id(name: &str) -> Option<u16> {
        MOVE_IDS.get(lookup_key(name).as_str()).copied()
    }
}

fn lookup_key(name: &str) -> String {
    name.trim().to_lowercase().replace([' ', '-'], "_")
}

fn load_ron<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DataLoadError> {
    let content = fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    ron::from_str(&content).map_err(|source| DataLoadError::Ron {
        path: path.display().to_string(),
        source,
    })
}
