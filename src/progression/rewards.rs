use crate::battle::state::{BattleRewards, BattleType};
use crate::constants::{GOLD_PER_LEVEL_TRAINER, GOLD_PER_LEVEL_WILD, XP_YIELD_DIVISOR};
use crate::data::GameData;
use crate::errors::SpeciesDataResult;
use crate::inventory::Inventory;
use crate::monster::MonsterInst;
use crate::progression::leveling::{apply_xp, LevelUpResult};

/// Experience for defeating a combatant: `floor(base_exp_yield * level / 7)`.
pub fn xp_gain(base_exp_yield: u32, defeated_level: u8) -> u32 {
    base_exp_yield * defeated_level as u32 / XP_YIELD_DIVISOR
}

/// Gold for defeating a combatant: `floor(level * 15)` against trainers, `floor(level * 8)` in the wild.
pub fn gold_reward(defeated_level: u8, battle_type: BattleType) -> u32 {
    let per_level = match battle_type {
        BattleType::Trainer => GOLD_PER_LEVEL_TRAINER,
        BattleType::Wild => GOLD_PER_LEVEL_WILD,
    };
    (defeated_level as f64 * per_level).floor() as u32
}

/// Pay out the rewards for one defeated opponent: gold into `inventory`,
/// experience into `recipient`. Returns the level-ups for presentation;
/// offering new moves and evolving are left to the caller.
pub fn apply_battle_rewards(
    rewards: &BattleRewards,
    recipient: &mut MonsterInst,
    inventory: &mut Inventory,
    data: &GameData,
) -> SpeciesDataResult<Vec<LevelUpResult>> {
    inventory.add_gold(rewards.gold);
    let level_ups = apply_xp(recipient, rewards.xp, data)?;
    tracing::debug!(
        xp = rewards.xp,
        gold = rewards.gold,
        levels_gained = level_ups.len(),
        "applied battle rewards"
    );
    Ok(level_ups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(62, 5, 44)]
    #[case(60, 7, 60)]
    #[case(1, 1, 0)]
    #[case(300, 50, 2142)]
    fn test_xp_gain(#[case] base: u32, #[case] level: u8, #[case] expected: u32) {
        assert_eq!(xp_gain(base, level), expected);
    }

    #[rstest]
    #[case(10, BattleType::Wild, 80)]
    #[case(10, BattleType::Trainer, 150)]
    #[case(1, BattleType::Wild, 8)]
    fn test_gold_reward(#[case] level: u8, #[case] battle_type: BattleType, #[case] expected: u32) {
        assert_eq!(gold_reward(level, battle_type), expected);
    }

    #[test]
    fn test_apply_battle_rewards_pays_gold_and_xp() {
        let data = GameData::builtin();
        let mut recipient = MonsterInst::new(1, 5, data).unwrap();
        let mut inventory = Inventory::new();
        inventory.add_gold(10);

        let rewards = BattleRewards { xp: 218, gold: 40 };
        let level_ups = apply_battle_rewards(&rewards, &mut recipient, &mut inventory, data).unwrap();

        assert_eq!(inventory.gold(), 50);
        assert_eq!(level_ups.len(), 2);
        assert_eq!(recipient.level, 7);
    }
}
