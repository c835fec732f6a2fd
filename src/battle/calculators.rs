use crate::constants::{
    CRIT_CHANCE, CRIT_MULTIPLIER, DAMAGE_SPREAD_MIN, DAMAGE_SPREAD_RANGE, STAB_MULTIPLIER,
};
use crate::monster::MonsterInst;
use crate::rng::GameRng;
use schema::{MonsterSpecies, MonsterType, MoveCategory, MoveData};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageResult {
    pub damage: u16,
    pub is_critical: bool,
    pub effectiveness: f64,
}

impl DamageResult {
    pub fn no_damage() -> Self {
        Self {
            damage: 0,
            is_critical: false,
            effectiveness: 1.0,
        }
    }
}

/// Damage one hit of `move_data` deals.
///
/// Formula: `((2*level/5 + 2) * power * (A/D) / 50 + 2) * STAB * type * crit * spread`
///
/// Status moves return [`DamageResult::no_damage`] without touching the RNG.
/// Otherwise the crit roll is drawn first and the spread roll second.
pub fn calculate_damage(
    attacker: &MonsterInst,
    defender: &MonsterInst,
    move_data: &MoveData,
    attacker_species: &MonsterSpecies,
    defender_species: &MonsterSpecies,
    rng: &mut GameRng,
) -> DamageResult {
    if move_data.power == 0 {
        return DamageResult::no_damage();
    }

    let (attack, defense) = match move_data.category {
        MoveCategory::Physical => (attacker.stats.atk, defender.stats.def),
        _ => (attacker.stats.sp_atk, defender.stats.sp_def),
    };
    // A zero defense stat only shows up in hand-built data
    let defense = defense.max(1) as f64;

    let level_factor = (2.0 * attacker.level as f64) / 5.0 + 2.0;
    let base_damage = (level_factor * move_data.power as f64 * (attack as f64 / defense)) / 50.0 + 2.0;

    let stab = if attacker_species.has_type(move_data.move_type) {
        STAB_MULTIPLIER
    } else {
        1.0
    };
    let effectiveness = MonsterType::effectiveness(move_data.move_type, &defender_species.types);

    let is_critical = rng.next_roll("critical hit") < CRIT_CHANCE;
    let crit_multiplier = if is_critical { CRIT_MULTIPLIER } else { 1.0 };
    let spread = DAMAGE_SPREAD_MIN + rng.next_roll("damage spread") * DAMAGE_SPREAD_RANGE;

    let raw = (base_damage * stab * effectiveness * crit_multiplier * spread).floor();
    let mut damage = raw.min(u16::MAX as f64) as u16;
    if effectiveness > 0.0 && damage < 1 {
        damage = 1;
    }
    if effectiveness == 0.0 {
        damage = 0;
    }

    DamageResult {
        damage,
        is_critical,
        effectiveness,
    }
}

/// Accuracy check: hits when `roll * 100 < accuracy`.
pub fn move_hits(move_data: &MoveData, rng: &mut GameRng) -> bool {
    rng.next_roll("accuracy") * 100.0 < move_data.accuracy as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::GameData;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn setup(attacker_species: u16, defender_species: u16, level: u8) -> (MonsterInst, MonsterInst) {
        let data = GameData::builtin();
        (
            MonsterInst::new(attacker_species, level, data).unwrap(),
            MonsterInst::new(defender_species, level, data).unwrap(),
        )
    }

    fn damage_with(
        attacker_species: u16,
        defender_species: u16,
        move_id: u16,
        rolls: Vec<f64>,
    ) -> DamageResult {
        let data = GameData::builtin();
        let (attacker, defender) = setup(attacker_species, defender_species, 10);
        let mut rng = GameRng::new_for_test(rolls);
        calculate_damage(
            &attacker,
            &defender,
            data.move_data(move_id).unwrap(),
            data.species(attacker_species).unwrap(),
            data.species(defender_species).unwrap(),
            &mut rng,
        )
    }

    #[test]
    fn test_status_move_deals_nothing_and_draws_nothing() {
        // An empty script would panic on any draw
        let result = damage_with(1, 7, 3, vec![]);
        assert_eq!(result, DamageResult::no_damage());
    }

    #[test]
    fn test_known_value_without_crit_at_max_spread() {
        // Emberpup L10 Ember vs Scrapcat L10: spAtk 17, spDef 13
        // base = (6 * 40 * 17/13) / 50 + 2 = 8.2769; STAB 1.5 -> 12.415
        let result = damage_with(1, 15, 4, vec![0.5, 0.9999]);
        assert_eq!(
            result,
            DamageResult {
                damage: 12,
                is_critical: false,
                effectiveness: 1.0,
            }
        );
    }

    #[test]
    fn test_critical_multiplies_damage() {
        let normal = damage_with(1, 15, 4, vec![0.5, 0.5]);
        let critical = damage_with(1, 15, 4, vec![0.0, 0.5]);
        assert!(critical.is_critical);
        assert!(!normal.is_critical);
        assert!(critical.damage > normal.damage);
    }

    #[rstest]
    // Ember vs Sproutle (grass/poison)
    #[case(1, 7, 4, 2.0)]
    // Water Gun vs Emberpup
    #[case(4, 1, 7, 2.0)]
    // Ember vs Driplet
    #[case(1, 4, 4, 0.5)]
    // Scratch is neutral
    #[case(1, 4, 2, 1.0)]
    fn test_effectiveness_is_reported(
        #[case] attacker: u16,
        #[case] defender: u16,
        #[case] move_id: u16,
        #[case] expected: f64,
    ) {
        let result = damage_with(attacker, defender, move_id, vec![0.5, 0.5]);
        assert_eq!(result.effectiveness, expected);
        assert!(result.damage >= 1);
    }

    #[test]
    fn test_immunity_deals_zero() {
        // Thunder Shock vs Pebblemole (ground)
        let result = damage_with(9, 12, 13, vec![0.0, 0.5]);
        assert_eq!(result.effectiveness, 0.0);
        assert_eq!(result.damage, 0);
    }

    #[test]
    fn test_weak_hit_still_deals_one() {
        let data = GameData::builtin();
        // Level 1 Scrapcat's Poison Sting into a level 50 Titanwyrm: poison vs ground resists
        let attacker = MonsterInst::new(15, 1, data).unwrap();
        let defender = MonsterInst::new(16, 50, data).unwrap();
        let mut rng = GameRng::new_for_test(vec![0.9, 0.0]);
        let result = calculate_damage(
            &attacker,
            &defender,
            data.move_data(20).unwrap(),
            data.species(15).unwrap(),
            data.species(16).unwrap(),
            &mut rng,
        );
        assert_eq!(result.effectiveness, 0.5);
        assert_eq!(result.damage, 1);
    }

    #[rstest]
    #[case(0.0, true)]
    #[case(0.94, true)]
    #[case(0.96, false)]
    #[case(0.99, false)]
    fn test_accuracy_threshold(#[case] roll: f64, #[case] hits: bool) {
        // Razor Leaf has 95 accuracy
        let data = GameData::builtin();
        let mut rng = GameRng::new_for_test(vec![roll]);
        assert_eq!(move_hits(data.move_data(11).unwrap(), &mut rng), hits);
    }
}
