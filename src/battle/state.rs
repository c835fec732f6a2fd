use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleType {
    /// A single wild combatant. Running and catching are allowed.
    Wild,
    /// An NPC trainer with one or more combatants.
    Trainer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    Player,
    Opponent,
}

/// Where a battle stands between calls to `submit_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattlePhase {
    Active,
    /// The player's active combatant fainted and another is still standing.
    NeedsPlayerSwitch,
    /// A trainer's active combatant fainted and another is still standing.
    NeedsOpponentAdvance,
    /// `None` means nobody won: the player ran away.
    Over(Option<Winner>),
}

impl BattlePhase {
    pub fn is_over(&self) -> bool {
        matches!(self, BattlePhase::Over(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BattleAction {
    Attack { move_id: u16 },
    /// `multiplier` defaults to 1.0, see `ItemEffect::Capture`.
    Catch { multiplier: Option<f64> },
    Switch { index: usize },
    Run,
    /// The caller already applied the item; the opponent gets its free attack.
    Item,
}

/// One resolved attack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnResult {
    pub attacker_side: Side,
    pub attacker_name: String,
    pub defender_name: String,
    pub move_name: String,
    pub damage: u16,
    pub is_critical: bool,
    pub effectiveness: f64,
    pub defender_remaining_hp: u16,
    pub defender_fainted: bool,
    pub missed: bool,
}

impl fmt::Display for TurnResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} used {}!", self.attacker_name, self.move_name)?;
        if self.missed {
            return write!(f, " It missed!");
        }
        if self.is_critical {
            write!(f, " A critical hit!")?;
        }
        if self.effectiveness == 0.0 {
            write!(f, " It doesn't affect {}...", self.defender_name)?;
        } else if self.effectiveness > 1.0 {
            write!(f, " It's super effective!")?;
        } else if self.effectiveness < 1.0 {
            write!(f, " It's not very effective...")?;
        }
        if self.damage > 0 {
            write!(
                f,
                " {} took {} damage ({} HP left).",
                self.defender_name, self.damage, self.defender_remaining_hp
            )?;
        }
        if self.defender_fainted {
            write!(f, " {} fainted!", self.defender_name)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatchResult {
    pub success: bool,
    /// 0 to 3; three shakes means caught.
    pub shakes: u8,
}

/// Rewards for the most recently defeated opponent. Applying them is the caller's job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRewards {
    pub xp: u32,
    pub gold: u32,
}

/// Everything one call to `submit_action` produced, in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub turn_results: Vec<TurnResult>,
    pub catch_result: Option<CatchResult>,
    /// Set when an opponent fainted during this action.
    pub rewards: Option<BattleRewards>,
}

impl ActionOutcome {
    /// True for rejected actions and for calls made after the battle ended.
    pub fn is_empty(&self) -> bool {
        self.turn_results.is_empty() && self.catch_result.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> TurnResult {
        TurnResult {
            attacker_side: Side::Player,
            attacker_name: "Emberpup".to_string(),
            defender_name: "Sproutle".to_string(),
            move_name: "Ember".to_string(),
            damage: 12,
            is_critical: false,
            effectiveness: 2.0,
            defender_remaining_hp: 3,
            defender_fainted: false,
            missed: false,
        }
    }

    #[test]
    fn test_turn_result_display() {
        assert_eq!(
            result().to_string(),
            "Emberpup used Ember! It's super effective! Sproutle took 12 damage (3 HP left)."
        );

        let missed = TurnResult {
            missed: true,
            damage: 0,
            effectiveness: 1.0,
            ..result()
        };
        assert_eq!(missed.to_string(), "Emberpup used Ember! It missed!");

        let knockout = TurnResult {
            is_critical: true,
            effectiveness: 1.0,
            defender_remaining_hp: 0,
            defender_fainted: true,
            ..result()
        };
        assert_eq!(
            knockout.to_string(),
            "Emberpup used Ember! A critical hit! Sproutle took 12 damage (0 HP left). Sproutle fainted!"
        );
    }

    #[test]
    fn test_phase_helpers() {
        assert!(BattlePhase::Over(None).is_over());
        assert!(!BattlePhase::NeedsPlayerSwitch.is_over());
        assert_eq!(Side::Player.opposite(), Side::Opponent);
        assert!(ActionOutcome::default().is_empty());
    }

    #[test]
    fn test_records_serialize() {
        let json = serde_json::to_string(&result()).unwrap();
        let back: TurnResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result());
    }
}
