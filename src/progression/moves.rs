use crate::constants::MAX_MOVES;
use crate::monster::MonsterInst;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LearnMoveResult {
    AlreadyKnown,
    Learned,
    Replaced { forgotten: u16 },
    Declined,
}

/// Teach `move_id`, respecting the four-move limit.
///
/// With a free slot the move is appended. With a full move list it replaces
/// `replace_slot`; no slot (or one past the end) means the move is declined.
pub fn learn_move(
    combatant: &mut MonsterInst,
    move_id: u16,
    replace_slot: Option<usize>,
) -> LearnMoveResult {
    if combatant.knows_move(move_id) {
        return LearnMoveResult::AlreadyKnown;
    }

    if combatant.moves.len() < MAX_MOVES {
        combatant.moves.push(move_id);
        return LearnMoveResult::Learned;
    }

    match replace_slot {
        Some(slot) if slot < combatant.moves.len() => {
            let forgotten = std::mem::replace(&mut combatant.moves[slot], move_id);
            LearnMoveResult::Replaced { forgotten }
        }
        _ => LearnMoveResult::Declined,
    }
}
