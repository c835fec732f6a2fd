use crate::battle::state::CatchResult;
use crate::constants::{CAPTURE_SHAKES, CATCH_BST_CEILING, MAX_CATCH_RATE, MIN_CATCH_RATE};
use crate::monster::MonsterInst;
use crate::rng::GameRng;
use schema::MonsterSpecies;

/// Species catch rate: weaker species (lower BST) are easier to catch.
/// Formula: `clamp((600 - BST) / 600, 0.1, 0.9)`
pub fn species_catch_rate(species: &MonsterSpecies) -> f64 {
    ((CATCH_BST_CEILING - species.base_stats.total() as f64) / CATCH_BST_CEILING)
        .clamp(MIN_CATCH_RATE, MAX_CATCH_RATE)
}

/// Overall chance a single throw succeeds, capped at 1.
/// Formula: `min(1, (3*maxHP - 2*currentHP) / (3*maxHP) * catch_rate * multiplier)`
pub fn capture_chance(wild: &MonsterInst, wild_species: &MonsterSpecies, catch_multiplier: f64) -> f64 {
    let max_hp = wild.max_hp.max(1) as f64;
    let current_hp = wild.current_hp as f64;
    let hp_factor = (3.0 * max_hp - 2.0 * current_hp) / (3.0 * max_hp);
    (hp_factor * species_catch_rate(wild_species) * catch_multiplier).clamp(0.0, 1.0)
}

/// Roll up to three shakes, each passing with `chance^(1/3)`; the first failure stops.
pub fn attempt_capture(
    wild: &MonsterInst,
    wild_species: &MonsterSpecies,
    catch_multiplier: f64,
    rng: &mut GameRng,
) -> CatchResult {
    let shake_probability = capture_chance(wild, wild_species, catch_multiplier).cbrt();

    let mut shakes = 0;
    while shakes < CAPTURE_SHAKES {
        if rng.next_roll("capture shake") < shake_probability {
            shakes += 1;
        } else {
            break;
        }
    }

    tracing::debug!(
        species = %wild_species.name,
        shake_probability,
        shakes,
        "capture attempt"
    );

    CatchResult {
        success: shakes == CAPTURE_SHAKES,
        shakes,
    }
}
