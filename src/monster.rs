use crate::constants::MAX_MOVES;
use crate::data::GameData;
use crate::errors::SpeciesDataResult;
use crate::progression::leveling::xp_for_level;
use crate::progression::stats::compute_stats;
use schema::{BaseStats, MonsterSpecies};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A living combatant owned by a party or a storage box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterInst {
    pub uid: Uuid,
    pub species_id: u16,
    pub nickname: Option<String>,
    pub level: u8,
    pub current_hp: u16,
    pub max_hp: u16,
    /// Realized stats at the current level; `stats.hp` mirrors `max_hp`.
    pub stats: BaseStats,
    /// Known move ids in slot order, at most four.
    pub moves: Vec<u16>,
    pub experience: u32,
}

impl MonsterInst {
    /// Build a fresh combatant at full HP knowing the latest moves its species
    /// learns up to `level`.
    pub fn new(species_id: u16, level: u8, data: &GameData) -> SpeciesDataResult<Self> {
        let species = data.species(species_id)?;
        Ok(Self::from_species(species, level))
    }

    pub fn from_species(species: &MonsterSpecies, level: u8) -> Self {
        let stats = compute_stats(&species.base_stats, level);
        MonsterInst {
            uid: Uuid::new_v4(),
            species_id: species.id,
            nickname: None,
            level,
            current_hp: stats.hp,
            max_hp: stats.hp,
            stats,
            moves: starting_moves(species, level),
            experience: xp_for_level(level),
        }
    }

    /// Replace the known moves, keeping at most four.
    pub fn with_moves(mut self, moves: Vec<u16>) -> Self {
        self.moves = moves.into_iter().take(MAX_MOVES).collect();
        self
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    /// Nickname if set, otherwise the species name.
    pub fn display_name<'a>(&'a self, species: &'a MonsterSpecies) -> &'a str {
        self.nickname.as_deref().unwrap_or(&species.name)
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    pub fn is_alive(&self) -> bool {
        !self.is_fainted()
    }

    pub fn knows_move(&self, move_id: u16) -> bool {
        self.moves.contains(&move_id)
    }

    /// Subtract `amount` HP, stopping at zero. Returns true if this knocked it out.
    pub fn take_damage(&mut self, amount: u16) -> bool {
        let was_alive = self.is_alive();
        self.current_hp = self.current_hp.saturating_sub(amount);
        was_alive && self.is_fainted()
    }

    /// Restore up to `amount` HP without exceeding max. Returns the HP actually restored.
    pub fn heal(&mut self, amount: u16) -> u16 {
        let before = self.current_hp;
        self.set_hp(self.current_hp.saturating_add(amount));
        self.current_hp - before
    }

    pub fn set_hp(&mut self, hp: u16) {
        self.current_hp = hp.min(self.max_hp);
    }

    pub fn set_hp_to_max(&mut self) {
        self.current_hp = self.max_hp;
    }
}

/// Up to four movepool entries at or below `level`, latest learned first.
fn starting_moves(species: &MonsterSpecies, level: u8) -> Vec<u16> {
    let mut eligible: Vec<_> = species
        .movepool
        .iter()
        .filter(|entry| entry.learn_level <= level)
        .collect();
    // Stable sort keeps movepool order among moves learned at the same level
    eligible.sort_by(|a, b| b.learn_level.cmp(&a.learn_level));

    let mut moves = Vec::with_capacity(MAX_MOVES);
    for entry in eligible {
        if moves.len() == MAX_MOVES {
            break;
        }
        if !moves.contains(&entry.move_id) {
            moves.push(entry.move_id);
        }
    }
    moves
}
