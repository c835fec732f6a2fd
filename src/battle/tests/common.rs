use crate::battle::engine::BattleEngine;
use crate::battle::state::BattleType;
use crate::data::GameData;
use crate::errors::BattleResult;
use crate::monster::MonsterInst;
use crate::rng::GameRng;
use schema::BaseStats;

/// A builder for creating test combatants with common defaults.
///
/// # Example
/// ```ignore
/// let mon = TestMonsterBuilder::new(SCRAPCAT, 10)
///     .with_moves(vec![TACKLE])
///     .with_speed(100)
///     .build();
/// ```
pub struct TestMonsterBuilder {
    species_id: u16,
    level: u8,
    moves: Option<Vec<u16>>,
    current_hp: Option<u16>,
    max_hp: Option<u16>,
    speed: Option<u16>,
    stats: Option<BaseStats>,
}

impl TestMonsterBuilder {
    /// Creates a new builder for a given species and level.
    pub fn new(species_id: u16, level: u8) -> Self {
        Self {
            species_id,
            level,
            moves: None,
            current_hp: None,
            max_hp: None,
            speed: None,
            stats: None,
        }
    }

    /// Sets the known moves. If not set, the species defaults for the level are used.
    pub fn with_moves(mut self, moves: Vec<u16>) -> Self {
        self.moves = Some(moves);
        self
    }

    /// Sets the current HP. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    /// Overrides max HP (and `stats.hp`).
    pub fn with_max_hp(mut self, max_hp: u16) -> Self {
        self.max_hp = Some(max_hp);
        self
    }

    pub fn with_speed(mut self, speed: u16) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Overrides the whole realized stat block.
    pub fn with_stats(mut self, stats: BaseStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn fainted(self) -> Self {
        self.with_hp(0)
    }

    /// Builds the `MonsterInst`.
    pub fn build(self) -> MonsterInst {
        let mut mon = match MonsterInst::new(self.species_id, self.level, GameData::builtin()) {
            Ok(mon) => mon,
            Err(err) => panic!("Failed to build species {}: {}", self.species_id, err),
        };
        if let Some(moves) = self.moves {
            mon = mon.with_moves(moves);
        }
        if let Some(stats) = self.stats {
            mon.stats = stats;
            mon.max_hp = stats.hp;
        }
        if let Some(max_hp) = self.max_hp {
            mon.max_hp = max_hp;
            mon.stats.hp = max_hp;
        }
        if let Some(speed) = self.speed {
            mon.stats.speed = speed;
        }
        mon.set_hp_to_max();
        if let Some(hp) = self.current_hp {
            mon.set_hp(hp);
        }
        mon
    }
}

// Builtin ids used across the scenario tests
pub const EMBERPUP: u16 = 1;
pub const DRIPLET: u16 = 4;
pub const SPROUTLE: u16 = 7;
pub const VOLTMOUSE: u16 = 9;
pub const FROSTLING: u16 = 11;
pub const PEBBLEMOLE: u16 = 12;
pub const SCRAPCAT: u16 = 15;
pub const TITANWYRM: u16 = 16;

pub const TACKLE: u16 = 1;
pub const GROWL: u16 = 3;
pub const EMBER: u16 = 4;
pub const THUNDER_SHOCK: u16 = 13;
pub const HYDRO_PUMP: u16 = 28;

/// Rolls for one opponent attack in a wild battle: move choice, accuracy, crit, spread.
pub const WILD_ATTACK: [f64; 4] = [0.0, 0.0, 0.5, 0.5];
/// Rolls for one player attack: accuracy, crit, spread.
pub const PLAYER_ATTACK: [f64; 3] = [0.0, 0.5, 0.5];

/// A `GameRng` with a generous buffer of mid-range rolls, for tests where the
/// specific outcome is not important.
pub fn predictable_rng() -> GameRng {
    GameRng::new_for_test(vec![0.5; 200])
}

/// Concatenate roll groups into one scripted `GameRng`.
pub fn scripted(groups: &[&[f64]]) -> GameRng {
    GameRng::new_for_test(groups.concat())
}

/// Builds an engine over the given parties.
pub fn create_test_battle<'a>(
    party: &'a mut [MonsterInst],
    opponents: &'a mut [MonsterInst],
    battle_type: BattleType,
    rng: GameRng,
) -> BattleEngine<'a> {
    assert_ok(BattleEngine::new(
        party,
        opponents,
        GameData::builtin(),
        battle_type,
        rng,
    ))
}

/// Helper function to assert that a Result is Ok and return the value.
/// Provides clear error messages in tests when functions unexpectedly fail.
pub fn assert_ok<T>(result: BattleResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
