use crate::constants::MAX_LEVEL;
use crate::data::GameData;
use crate::errors::SpeciesDataResult;
use crate::monster::MonsterInst;
use crate::progression::stats::compute_stats;
use schema::BaseStats;
use serde::{Deserialize, Serialize};

/// Total experience needed to reach `level` (cubic curve).
pub fn xp_for_level(level: u8) -> u32 {
    let level = level as u32;
    level * level * level
}

/// Species a combatant became eligible to evolve into on a level-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionCandidate {
    pub species_id: u16,
    pub species_name: String,
}

/// What changed for a single level gained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUpResult {
    pub new_level: u8,
    pub new_stats: BaseStats,
    pub new_max_hp: u16,
    /// Change in max HP. Signed because an evolution can lower base HP.
    pub hp_increase: i32,
    /// Moves learnable at this level that the combatant does not already know.
    /// They are offered, not learned; see [`crate::progression::moves::learn_move`].
    pub new_moves: Vec<u16>,
    pub evolution: Option<EvolutionCandidate>,
}

/// Add `xp_gained` and raise the level as many times as the curve allows.
///
/// Stats are recomputed from the species the combatant currently belongs to
/// and current HP rises by the max HP delta. A fainted combatant stays fainted.
pub fn apply_xp(
    combatant: &mut MonsterInst,
    xp_gained: u32,
    data: &GameData,
) -> SpeciesDataResult<Vec<LevelUpResult>> {
    let mut results = Vec::new();
    combatant.experience = combatant.experience.saturating_add(xp_gained);

    while combatant.level < MAX_LEVEL && combatant.experience >= xp_for_level(combatant.level + 1) {
        let species = data.species(combatant.species_id)?;
        let old_max_hp = combatant.max_hp;
        combatant.level += 1;

        let new_stats = compute_stats(&species.base_stats, combatant.level);
        combatant.stats = new_stats;
        combatant.max_hp = new_stats.hp;

        let hp_increase = new_stats.hp as i32 - old_max_hp as i32;
        if combatant.is_alive() {
            let healed = (combatant.current_hp as i32 + hp_increase).max(1);
            combatant.set_hp(healed as u16);
        }

        let new_moves: Vec<u16> = species
            .moves_learned_at(combatant.level)
            .into_iter()
            .filter(|move_id| !combatant.knows_move(*move_id))
            .collect();

        // Unresolvable targets are skipped
        let evolution = species
            .evolves_to
            .filter(|target| combatant.level >= target.level)
            .and_then(|target| data.species(target.species_id).ok())
            .map(|evolved| EvolutionCandidate {
                species_id: evolved.id,
                species_name: evolved.name.clone(),
            });

        tracing::debug!(
            species = %species.name,
            level = combatant.level,
            max_hp = combatant.max_hp,
            new_moves = ?new_moves,
            "level up"
        );

        results.push(LevelUpResult {
            new_level: combatant.level,
            new_stats,
            new_max_hp: new_stats.hp,
            hp_increase,
            new_moves,
            evolution,
        });
    }

    Ok(results)
}
