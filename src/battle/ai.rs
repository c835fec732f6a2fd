//! A module for defining AI behaviors for battle opponents.

use crate::battle::calculators::calculate_damage;
use crate::battle::state::BattleType;
use crate::data::GameData;
use crate::errors::{BattleResult, BattleStateError};
use crate::monster::MonsterInst;
use crate::rng::GameRng;
use ordered_float::OrderedFloat;
use schema::MonsterSpecies;

/// The two combatants facing each other when a move has to be picked.
pub struct Matchup<'a> {
    pub attacker: &'a MonsterInst,
    pub attacker_species: &'a MonsterSpecies,
    pub defender: &'a MonsterInst,
    pub defender_species: &'a MonsterSpecies,
}

/// A trait for any system that can pick a move for a combatant.
pub trait Behavior {
    fn choose_move(&self, matchup: &Matchup<'_>, data: &GameData, rng: &mut GameRng) -> BattleResult<u16>;
}

/// Wild combatants pick uniformly among the moves they know.
pub struct RandomBehavior;

impl Behavior for RandomBehavior {
    fn choose_move(&self, matchup: &Matchup<'_>, _data: &GameData, rng: &mut GameRng) -> BattleResult<u16> {
        let moves = &matchup.attacker.moves;
        if moves.is_empty() {
            return Err(no_moves(matchup).into());
        }
        let index = rng.next_index(moves.len(), "wild move choice");
        Ok(moves[index])
    }
}

/// Trainers pick the move with the highest expected damage
/// (`damage * accuracy / 100`). Ties go to the earlier move slot.
pub struct GreedyBehavior;

impl GreedyBehavior {
    /// Expected damage of each known move that resolves in `data`, in slot order.
    pub fn score_moves(matchup: &Matchup<'_>, data: &GameData, rng: &mut GameRng) -> Vec<(u16, f64)> {
        matchup
            .attacker
            .moves
            .iter()
            .filter_map(|&move_id| data.move_data(move_id).ok())
            .map(|move_data| {
                let result = calculate_damage(
                    matchup.attacker,
                    matchup.defender,
                    move_data,
                    matchup.attacker_species,
                    matchup.defender_species,
                    rng,
                );
                let expected = result.damage as f64 * (move_data.accuracy as f64 / 100.0);
                (move_data.id, expected)
            })
            .collect()
    }
}

impl Behavior for GreedyBehavior {
    fn choose_move(&self, matchup: &Matchup<'_>, data: &GameData, rng: &mut GameRng) -> BattleResult<u16> {
        let fallback = *matchup
            .attacker
            .moves
            .first()
            .ok_or_else(|| no_moves(matchup))?;

        let scores = Self::score_moves(matchup, data, rng);
        // max_by_key keeps the last maximum, so walk backwards to favor the first slot
        let best = scores
            .iter()
            .rev()
            .max_by_key(|(_, expected)| OrderedFloat(*expected))
            .map(|(move_id, _)| *move_id)
            .unwrap_or(fallback);
        Ok(best)
    }
}

/// Pick the behavior opponents use in this kind of battle.
pub fn behavior_for(battle_type: BattleType) -> &'static dyn Behavior {
    match battle_type {
        BattleType::Wild => &RandomBehavior,
        BattleType::Trainer => &GreedyBehavior,
    }
}

fn no_moves(matchup: &Matchup<'_>) -> BattleStateError {
    BattleStateError::NoMoves(matchup.attacker.display_name(matchup.attacker_species).to_string())
}
