use crate::battle::state::BattleType;
use crate::monster::MonsterInst;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CatchError {
    /// Catch attempts not allowed in this battle type
    InvalidBattleType { battle_type: BattleType },
    /// Target is already fainted
    TargetFainted,
}

/// Check if catch attempts are allowed based on battle type
pub fn is_catch_allowed(battle_type: BattleType) -> bool {
    matches!(battle_type, BattleType::Wild)
}

/// Validate a throw at `target` before any dice are rolled.
pub fn can_attempt_catch(battle_type: BattleType, target: &MonsterInst) -> Result<(), CatchError> {
    if !is_catch_allowed(battle_type) {
        return Err(CatchError::InvalidBattleType { battle_type });
    }
    if target.is_fainted() {
        return Err(CatchError::TargetFainted);
    }
    Ok(())
}
