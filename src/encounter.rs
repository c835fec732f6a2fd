use crate::data::GameData;
use crate::errors::SpeciesDataResult;
use crate::monster::MonsterInst;
use crate::rng::GameRng;
use schema::{EncounterEntry, EncounterZone, TrainerData};

/// One step through a zone: true if a wild encounter starts.
pub fn roll_encounter(zone: &EncounterZone, rng: &mut GameRng) -> bool {
    rng.next_roll("encounter check") < zone.encounter_rate
}

/// Pick a pool entry with probability proportional to its weight.
/// The last entry absorbs any rounding left over. `None` for an empty pool.
pub fn select_encounter<'z>(zone: &'z EncounterZone, rng: &mut GameRng) -> Option<&'z EncounterEntry> {
    let last = zone.pool.last()?;
    let total_weight: u32 = zone.pool.iter().map(|entry| entry.weight).sum();

    let mut roll = rng.next_roll("encounter species") * total_weight as f64;
    for entry in &zone.pool {
        roll -= entry.weight as f64;
        if roll <= 0.0 {
            return Some(entry);
        }
    }
    Some(last)
}

/// Roll a wild combatant for `zone`: species by weight, then a uniform level
/// in the entry's range.
pub fn generate_encounter(
    zone: &EncounterZone,
    data: &GameData,
    rng: &mut GameRng,
) -> SpeciesDataResult<Option<MonsterInst>> {
    let Some(entry) = select_encounter(zone, rng) else {
        return Ok(None);
    };
    let level = rng.next_in_range(entry.min_level, entry.max_level, "encounter level");
    let monster = MonsterInst::new(entry.species_id, level, data)?;

    tracing::debug!(species_id = entry.species_id, level, "wild encounter");
    Ok(Some(monster))
}

/// Instantiate a trainer's party in listed order.
pub fn build_trainer_party(trainer: &TrainerData, data: &GameData) -> SpeciesDataResult<Vec<MonsterInst>> {
    trainer
        .party
        .iter()
        .map(|entry| MonsterInst::new(entry.species_id, entry.level, data))
        .collect()
}
