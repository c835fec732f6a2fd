use crate::battle::ai::{behavior_for, Matchup};
use crate::battle::calculators::{calculate_damage, move_hits};
use crate::battle::catch::{attempt_capture, can_attempt_catch};
use crate::battle::state::{
    ActionOutcome, BattleAction, BattlePhase, BattleRewards, BattleType, Side, TurnResult, Winner,
};
use crate::data::GameData;
use crate::errors::{BattleResult, BattleStateError};
use crate::monster::MonsterInst;
use crate::progression::rewards::{gold_reward, xp_gain};
use crate::rng::GameRng;
use schema::{MonsterSpecies, MoveData};

/// Resolves one encounter between the player's party and an opponent party.
///
/// The engine borrows both parties for its whole lifetime and mutates HP in
/// place. Each call to [`BattleEngine::submit_action`] resolves one player
/// action and returns the events it produced. After it the caller inspects
/// [`BattleEngine::phase`] and calls [`BattleEngine::force_switch`] or
/// [`BattleEngine::advance_opponent`] when asked to.
pub struct BattleEngine<'a> {
    party: &'a mut [MonsterInst],
    opponent_party: &'a mut [MonsterInst],
    data: &'a GameData,
    rng: GameRng,
    battle_type: BattleType,
    active_index: usize,
    opponent_index: usize,
    phase: BattlePhase,
    caught: bool,
    rewards: BattleRewards,
}

impl<'a> BattleEngine<'a> {
    /// Both parties must be non-empty and every species must exist in `data`.
    /// The first living member of each party starts active.
    pub fn new(
        party: &'a mut [MonsterInst],
        opponent_party: &'a mut [MonsterInst],
        data: &'a GameData,
        battle_type: BattleType,
        rng: GameRng,
    ) -> BattleResult<Self> {
        if party.is_empty() {
            return Err(BattleStateError::EmptyParty("player").into());
        }
        if opponent_party.is_empty() {
            return Err(BattleStateError::EmptyParty("opponent").into());
        }
        for monster in party.iter().chain(opponent_party.iter()) {
            data.species(monster.species_id)?;
        }

        let active_index = first_alive(party).unwrap_or(0);
        let opponent_index = first_alive(opponent_party).unwrap_or(0);

        Ok(Self {
            party,
            opponent_party,
            data,
            rng,
            battle_type,
            active_index,
            opponent_index,
            phase: BattlePhase::Active,
            caught: false,
            rewards: BattleRewards::default(),
        })
    }

    pub fn battle_type(&self) -> BattleType {
        self.battle_type
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    pub fn winner(&self) -> Option<Winner> {
        match self.phase {
            BattlePhase::Over(winner) => winner,
            _ => None,
        }
    }

    pub fn caught(&self) -> bool {
        self.caught
    }

    /// Rewards for the most recently defeated opponent.
    pub fn rewards(&self) -> BattleRewards {
        self.rewards
    }

    pub fn xp_gained(&self) -> u32 {
        self.rewards.xp
    }

    pub fn gold_reward(&self) -> u32 {
        self.rewards.gold
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn opponent_index(&self) -> usize {
        self.opponent_index
    }

    pub fn active_monster(&self) -> &MonsterInst {
        &self.party[self.active_index]
    }

    pub fn opponent_monster(&self) -> &MonsterInst {
        &self.opponent_party[self.opponent_index]
    }

    pub fn party(&self) -> &[MonsterInst] {
        &self.party[..]
    }

    pub fn opponent_party(&self) -> &[MonsterInst] {
        &self.opponent_party[..]
    }

    /// Submit the player's chosen action.
    ///
    /// Rejected actions (and any action once the battle is over) return an
    /// empty outcome and leave the battle untouched.
    pub fn submit_action(&mut self, action: BattleAction) -> BattleResult<ActionOutcome> {
        if self.is_over() {
            return Ok(ActionOutcome::default());
        }

        match action {
            BattleAction::Run => Ok(self.handle_run()),
            BattleAction::Catch { multiplier } => self.handle_catch(multiplier.unwrap_or(1.0)),
            BattleAction::Switch { index } => self.handle_switch(index),
            BattleAction::Item => self.handle_item(),
            BattleAction::Attack { move_id } => self.handle_attack(move_id),
        }
    }

    /// Bring in a living party member after the active one fainted.
    /// Returns false (and changes nothing) for a fainted or missing member.
    pub fn force_switch(&mut self, index: usize) -> bool {
        if self.is_over() {
            return false;
        }
        match self.party.get(index) {
            Some(monster) if monster.is_alive() => {
                self.active_index = index;
                if self.phase == BattlePhase::NeedsPlayerSwitch {
                    self.phase = BattlePhase::Active;
                }
                true
            }
            _ => {
                tracing::debug!(index, "rejected forced switch");
                false
            }
        }
    }

    /// Send out the next living opponent after the current one, wrapping
    /// around to the start. Returns false if nobody is left standing.
    pub fn advance_opponent(&mut self) -> bool {
        let len = self.opponent_party.len();
        let next = (1..=len)
            .map(|offset| (self.opponent_index + offset) % len)
            .find(|&index| self.opponent_party[index].is_alive());

        match next {
            Some(index) => {
                self.opponent_index = index;
                if self.phase == BattlePhase::NeedsOpponentAdvance {
                    self.phase = BattlePhase::Active;
                }
                true
            }
            None => false,
        }
    }

    fn handle_run(&mut self) -> ActionOutcome {
        if self.battle_type == BattleType::Trainer {
            tracing::debug!("cannot run from a trainer battle");
            return ActionOutcome::default();
        }
        self.finish(None);
        ActionOutcome::default()
    }

    fn handle_catch(&mut self, multiplier: f64) -> BattleResult<ActionOutcome> {
        if let Err(reason) = can_attempt_catch(self.battle_type, self.opponent_monster()) {
            tracing::debug!(?reason, "rejected catch");
            return Ok(ActionOutcome::default());
        }
        if self.active_monster().is_fainted() {
            tracing::debug!("rejected catch while the active combatant is fainted");
            return Ok(ActionOutcome::default());
        }

        let data = self.data;
        let target = &self.opponent_party[self.opponent_index];
        let species = data.species(target.species_id)?;
        let catch_result = attempt_capture(target, species, multiplier, &mut self.rng);

        let mut outcome = ActionOutcome {
            catch_result: Some(catch_result),
            ..ActionOutcome::default()
        };
        if catch_result.success {
            self.caught = true;
            self.finish(Some(Winner::Player));
            return Ok(outcome);
        }

        // The opponent gets a free attack when it breaks free
        let result = self.execute_opponent_attack()?;
        outcome.turn_results.push(result);
        self.check_faint(&mut outcome);
        Ok(outcome)
    }

    fn handle_switch(&mut self, index: usize) -> BattleResult<ActionOutcome> {
        let valid = index != self.active_index
            && self.party.get(index).is_some_and(MonsterInst::is_alive)
            && self.opponent_monster().is_alive();
        if !valid {
            tracing::debug!(index, "rejected switch");
            return Ok(ActionOutcome::default());
        }

        self.active_index = index;
        if self.phase == BattlePhase::NeedsPlayerSwitch {
            self.phase = BattlePhase::Active;
        }

        let mut outcome = ActionOutcome::default();
        let result = self.execute_opponent_attack()?;
        outcome.turn_results.push(result);
        self.check_faint(&mut outcome);
        Ok(outcome)
    }

    fn handle_item(&mut self) -> BattleResult<ActionOutcome> {
        if self.active_monster().is_fainted() || self.opponent_monster().is_fainted() {
            tracing::debug!("rejected item turn with a fainted combatant out");
            return Ok(ActionOutcome::default());
        }

        let mut outcome = ActionOutcome::default();
        let result = self.execute_opponent_attack()?;
        outcome.turn_results.push(result);
        self.check_faint(&mut outcome);
        Ok(outcome)
    }

    fn handle_attack(&mut self, move_id: u16) -> BattleResult<ActionOutcome> {
        let player = self.active_monster();
        let opponent = self.opponent_monster();
        if !player.knows_move(move_id) || player.is_fainted() || opponent.is_fainted() {
            tracing::debug!(move_id, "rejected attack");
            return Ok(ActionOutcome::default());
        }

        // Ties go to the player
        let player_first = player.stats.speed >= opponent.stats.speed;
        let mut outcome = ActionOutcome::default();

        if player_first {
            let result = self.execute_player_attack(move_id)?;
            outcome.turn_results.push(result);
            if !self.check_faint(&mut outcome) {
                let result = self.execute_opponent_attack()?;
                outcome.turn_results.push(result);
                self.check_faint(&mut outcome);
            }
        } else {
            let result = self.execute_opponent_attack()?;
            outcome.turn_results.push(result);
            if !self.check_faint(&mut outcome) {
                let result = self.execute_player_attack(move_id)?;
                outcome.turn_results.push(result);
                self.check_faint(&mut outcome);
            }
        }

        Ok(outcome)
    }

    fn execute_player_attack(&mut self, move_id: u16) -> BattleResult<TurnResult> {
        let data = self.data;
        let move_data = data.move_data(move_id)?;
        let attacker = &self.party[self.active_index];
        let defender = &mut self.opponent_party[self.opponent_index];
        let attacker_species = data.species(attacker.species_id)?;
        let defender_species = data.species(defender.species_id)?;

        Ok(execute_attack(
            Side::Player,
            attacker,
            attacker_species,
            defender,
            defender_species,
            move_data,
            &mut self.rng,
        ))
    }

    fn execute_opponent_attack(&mut self) -> BattleResult<TurnResult> {
        let data = self.data;
        let attacker = &self.opponent_party[self.opponent_index];
        let defender = &mut self.party[self.active_index];
        let attacker_species = data.species(attacker.species_id)?;
        let defender_species = data.species(defender.species_id)?;

        let matchup = Matchup {
            attacker,
            attacker_species,
            defender: &*defender,
            defender_species,
        };
        let move_id = behavior_for(self.battle_type).choose_move(&matchup, data, &mut self.rng)?;
        let move_data = data.move_data(move_id)?;

        Ok(execute_attack(
            Side::Opponent,
            attacker,
            attacker_species,
            defender,
            defender_species,
            move_data,
            &mut self.rng,
        ))
    }

    /// Settle the phase after a damaging event. Returns true if anyone fainted.
    fn check_faint(&mut self, outcome: &mut ActionOutcome) -> bool {
        let opponent = &self.opponent_party[self.opponent_index];
        if opponent.is_fainted() {
            // Species was resolved when the engine was built
            let base_exp_yield = self
                .data
                .species(opponent.species_id)
                .map(|species| species.base_exp_yield)
                .unwrap_or(0);
            self.rewards = BattleRewards {
                xp: xp_gain(base_exp_yield, opponent.level),
                gold: gold_reward(opponent.level, self.battle_type),
            };
            outcome.rewards = Some(self.rewards);

            let others_alive = self
                .opponent_party
                .iter()
                .enumerate()
                .any(|(index, monster)| index != self.opponent_index && monster.is_alive());
            if self.battle_type == BattleType::Trainer && others_alive {
                self.phase = BattlePhase::NeedsOpponentAdvance;
            } else {
                self.finish(Some(Winner::Player));
            }
            return true;
        }

        if self.party[self.active_index].is_fainted() {
            if first_alive(self.party).is_some() {
                self.phase = BattlePhase::NeedsPlayerSwitch;
            } else {
                self.finish(Some(Winner::Opponent));
            }
            return true;
        }

        false
    }

    fn finish(&mut self, winner: Option<Winner>) {
        self.phase = BattlePhase::Over(winner);
        tracing::info!(
            ?winner,
            caught = self.caught,
            xp = self.rewards.xp,
            gold = self.rewards.gold,
            "battle over"
        );
    }
}

/// Roll accuracy, then damage, and apply it to `defender`.
fn execute_attack(
    side: Side,
    attacker: &MonsterInst,
    attacker_species: &MonsterSpecies,
    defender: &mut MonsterInst,
    defender_species: &MonsterSpecies,
    move_data: &MoveData,
    rng: &mut GameRng,
) -> TurnResult {
    let attacker_name = attacker.display_name(attacker_species).to_string();
    let defender_name = defender.display_name(defender_species).to_string();

    if !move_hits(move_data, rng) {
        tracing::debug!(%side, attacker = %attacker_name, move_name = %move_data.name, "missed");
        return TurnResult {
            attacker_side: side,
            attacker_name,
            defender_name,
            move_name: move_data.name.clone(),
            damage: 0,
            is_critical: false,
            effectiveness: 1.0,
            defender_remaining_hp: defender.current_hp,
            defender_fainted: false,
            missed: true,
        };
    }

    let result = calculate_damage(
        attacker,
        defender,
        move_data,
        attacker_species,
        defender_species,
        rng,
    );
    defender.take_damage(result.damage);

    tracing::debug!(
        %side,
        attacker = %attacker_name,
        defender = %defender_name,
        move_name = %move_data.name,
        damage = result.damage,
        critical = result.is_critical,
        effectiveness = result.effectiveness,
        remaining_hp = defender.current_hp,
        "attack resolved"
    );

    TurnResult {
        attacker_side: side,
        attacker_name,
        defender_name,
        move_name: move_data.name.clone(),
        damage: result.damage,
        is_critical: result.is_critical,
        effectiveness: result.effectiveness,
        defender_remaining_hp: defender.current_hp,
        defender_fainted: defender.is_fainted(),
        missed: false,
    }
}

fn first_alive(party: &[MonsterInst]) -> Option<usize> {
    party.iter().position(MonsterInst::is_alive)
}
