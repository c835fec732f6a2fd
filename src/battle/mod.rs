pub mod ai;
pub mod calculators;
pub mod catch;
pub mod engine;
pub mod state;

pub use engine::BattleEngine;
pub use state::{
    ActionOutcome, BattleAction, BattlePhase, BattleRewards, BattleType, CatchResult, Side,
    TurnResult, Winner,
};

#[cfg(test)]
mod tests;
