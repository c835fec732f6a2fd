//! Tunable numbers shared by the battle engine and progression code.

/// Chance that a damaging hit lands as a critical.
pub const CRIT_CHANCE: f64 = 0.0625;
pub const CRIT_MULTIPLIER: f64 = 1.5;
/// Same-type attack bonus.
pub const STAB_MULTIPLIER: f64 = 1.5;

/// Random damage spread is uniform in `[DAMAGE_SPREAD_MIN, DAMAGE_SPREAD_MIN + DAMAGE_SPREAD_RANGE]`.
pub const DAMAGE_SPREAD_MIN: f64 = 0.85;
pub const DAMAGE_SPREAD_RANGE: f64 = 0.15;

pub const MIN_CATCH_RATE: f64 = 0.1;
pub const MAX_CATCH_RATE: f64 = 0.9;
pub const CATCH_BST_CEILING: f64 = 600.0;
pub const CAPTURE_SHAKES: u8 = 3;

pub const MAX_LEVEL: u8 = 50;
pub const MAX_MOVES: usize = 4;

pub const GOLD_PER_LEVEL_WILD: f64 = 8.0;
pub const GOLD_PER_LEVEL_TRAINER: f64 = 15.0;
pub const XP_YIELD_DIVISOR: u32 = 7;

pub const MAX_PARTY_SIZE: usize = 6;
pub const BOX_COUNT: usize = 8;
pub const BOX_SIZE: usize = 30;
