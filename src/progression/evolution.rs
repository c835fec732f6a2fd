use crate::data::GameData;
use crate::errors::SpeciesDataResult;
use crate::monster::MonsterInst;
use crate::progression::stats::compute_stats;

/// Turn `combatant` into `new_species_id`, recomputing stats at its current level.
///
/// For a standing combatant the signed max HP delta is added to current HP,
/// clamped to `[1, max_hp]`. A fainted combatant stays at 0 HP.
pub fn apply_evolution(
    combatant: &mut MonsterInst,
    new_species_id: u16,
    data: &GameData,
) -> SpeciesDataResult<()> {
    let species = data.species(new_species_id)?;
    let old_max_hp = combatant.max_hp as i32;
    let was_alive = combatant.is_alive();

    combatant.species_id = species.id;
    combatant.stats = compute_stats(&species.base_stats, combatant.level);
    combatant.max_hp = combatant.stats.hp;

    if was_alive {
        let delta = combatant.max_hp as i32 - old_max_hp;
        let hp = (combatant.current_hp as i32 + delta).clamp(1, combatant.max_hp.max(1) as i32);
        combatant.current_hp = hp as u16;
    } else {
        combatant.current_hp = 0;
    }

    tracing::debug!(species = %species.name, level = combatant.level, "evolved");
    Ok(())
}

/// The species `combatant` may evolve into at its current level, if any.
pub fn evolution_target(combatant: &MonsterInst, data: &GameData) -> SpeciesDataResult<Option<u16>> {
    let species = data.species(combatant.species_id)?;
    Ok(species
        .evolves_to
        .filter(|target| combatant.level >= target.level)
        .map(|target| target.species_id))
}
