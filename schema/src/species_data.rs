use crate::MonsterType;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

/// The six-stat block used both for species base stats and for the
/// realized stats of a combatant at a given level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub sp_atk: u16,
    pub sp_def: u16,
    pub speed: u16,
}

impl BaseStats {
    /// Base stat total (BST).
    pub fn total(&self) -> u32 {
        [self.hp, self.atk, self.def, self.sp_atk, self.sp_def, self.speed]
            .iter()
            .map(|&stat| stat as u32)
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovepoolEntry {
    pub learn_level: u8,
    pub move_id: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionTarget {
    pub species_id: u16,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterSpecies {
    pub id: u16,
    pub name: String,
    pub types: Vec<MonsterType>,
    pub base_stats: BaseStats,
    pub movepool: Vec<MovepoolEntry>,
    /// Placeholder color used until real sprites exist
    pub placeholder_color: String,
    pub rarity: Rarity,
    pub base_exp_yield: u32,
    pub evolves_to: Option<EvolutionTarget>,
}

impl MonsterSpecies {
    pub fn has_type(&self, monster_type: MonsterType) -> bool {
        self.types.contains(&monster_type)
    }

    /// Moves the species picks up exactly at `level`, in movepool order, without duplicates.
    pub fn moves_learned_at(&self, level: u8) -> Vec<u16> {
        let mut moves = Vec::new();
        for entry in self.movepool.iter().filter(|entry| entry.learn_level == level) {
            if !moves.contains(&entry.move_id) {
                moves.push(entry.move_id);
            }
        }
        moves
    }
}

impl fmt::Display for MonsterSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_names: Vec<String> = self.types.iter().map(|t| t.to_string()).collect();
        write!(f, "{} (#{:03}, {})", self.name, self.id, type_names.join("/"))
    }
}
