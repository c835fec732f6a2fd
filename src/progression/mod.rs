pub mod evolution;
pub mod leveling;
pub mod moves;
pub mod rewards;
pub mod stats;

pub use evolution::{apply_evolution, evolution_target};
pub use leveling::{apply_xp, xp_for_level, EvolutionCandidate, LevelUpResult};
pub use moves::{learn_move, LearnMoveResult};
pub use rewards::{apply_battle_rewards, gold_reward, xp_gain};
pub use stats::{compute_hp, compute_stat, compute_stats};
