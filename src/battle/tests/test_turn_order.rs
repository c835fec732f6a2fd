use crate::battle::state::{BattleAction, BattlePhase, BattleType, Side, Winner};
use crate::battle::tests::common::*;
use pretty_assertions::assert_eq;

#[test]
fn test_faster_player_knockout_produces_single_event() {
    let mut party = vec![TestMonsterBuilder::new(SCRAPCAT, 10)
        .with_moves(vec![TACKLE])
        .with_speed(100)
        .build()];
    let mut wild = vec![TestMonsterBuilder::new(FROSTLING, 5)
        .with_moves(vec![TACKLE])
        .with_speed(50)
        .with_max_hp(1)
        .build()];

    let mut engine = create_test_battle(
        &mut party,
        &mut wild,
        BattleType::Wild,
        scripted(&[&PLAYER_ATTACK[..]]),
    );
    let outcome = assert_ok(engine.submit_action(BattleAction::Attack { move_id: TACKLE }));

    assert_eq!(outcome.turn_results.len(), 1);
    let event = &outcome.turn_results[0];
    assert_eq!(event.attacker_side, Side::Player);
    assert_eq!(event.attacker_name, "Scrapcat");
    assert_eq!(event.defender_name, "Frostling");
    assert_eq!(event.move_name, "Tackle");
    assert!(event.defender_fainted);
    assert_eq!(event.defender_remaining_hp, 0);
    assert_eq!(engine.phase(), BattlePhase::Over(Some(Winner::Player)));
}

#[test]
fn test_speed_tie_goes_to_player() {
    let mut party = vec![TestMonsterBuilder::new(SCRAPCAT, 10)
        .with_moves(vec![TACKLE])
        .with_speed(50)
        .build()];
    let mut wild = vec![TestMonsterBuilder::new(FROSTLING, 10)
        .with_moves(vec![TACKLE])
        .with_speed(50)
        .build()];

    let mut engine = create_test_battle(
        &mut party,
        &mut wild,
        BattleType::Wild,
        scripted(&[&PLAYER_ATTACK[..], &WILD_ATTACK[..]]),
    );
    let outcome = assert_ok(engine.submit_action(BattleAction::Attack { move_id: TACKLE }));

    let sides: Vec<Side> = outcome.turn_results.iter().map(|r| r.attacker_side).collect();
    assert_eq!(sides, vec![Side::Player, Side::Opponent]);
    assert_eq!(engine.phase(), BattlePhase::Active);
}

#[test]
fn test_slower_player_moves_second() {
    let mut party = vec![TestMonsterBuilder::new(SCRAPCAT, 10)
        .with_moves(vec![TACKLE])
        .with_speed(10)
        .build()];
    let mut wild = vec![TestMonsterBuilder::new(FROSTLING, 10)
        .with_moves(vec![TACKLE])
        .with_speed(50)
        .build()];

    let mut engine = create_test_battle(
        &mut party,
        &mut wild,
        BattleType::Wild,
        scripted(&[&WILD_ATTACK[..], &PLAYER_ATTACK[..]]),
    );
    let outcome = assert_ok(engine.submit_action(BattleAction::Attack { move_id: TACKLE }));

    let sides: Vec<Side> = outcome.turn_results.iter().map(|r| r.attacker_side).collect();
    assert_eq!(sides, vec![Side::Opponent, Side::Player]);
    // HP in the events matches the parties
    assert_eq!(
        outcome.turn_results[0].defender_remaining_hp,
        engine.active_monster().current_hp
    );
    assert_eq!(
        outcome.turn_results[1].defender_remaining_hp,
        engine.opponent_monster().current_hp
    );
}

#[test]
fn test_slower_player_knocked_out_first_never_attacks() {
    let mut party = vec![TestMonsterBuilder::new(SCRAPCAT, 10)
        .with_moves(vec![TACKLE])
        .with_speed(10)
        .with_max_hp(1)
        .build()];
    let mut wild = vec![TestMonsterBuilder::new(FROSTLING, 10)
        .with_moves(vec![TACKLE])
        .with_speed(50)
        .build()];
    let wild_hp = wild[0].current_hp;

    let mut engine = create_test_battle(
        &mut party,
        &mut wild,
        BattleType::Wild,
        scripted(&[&WILD_ATTACK[..]]),
    );
    let outcome = assert_ok(engine.submit_action(BattleAction::Attack { move_id: TACKLE }));

    assert_eq!(outcome.turn_results.len(), 1);
    assert_eq!(outcome.turn_results[0].attacker_side, Side::Opponent);
    assert_eq!(engine.opponent_monster().current_hp, wild_hp);
    assert_eq!(engine.phase(), BattlePhase::Over(Some(Winner::Opponent)));
}

#[test]
fn test_missed_attack_reports_neutral_and_deals_nothing() {
    let mut party = vec![TestMonsterBuilder::new(DRIPLET, 10)
        .with_moves(vec![HYDRO_PUMP])
        .with_speed(100)
        .build()];
    let mut wild = vec![TestMonsterBuilder::new(EMBERPUP, 10)
        .with_moves(vec![TACKLE])
        .with_speed(10)
        .build()];
    let wild_hp = wild[0].current_hp;

    // Hydro Pump has 80 accuracy, so a 0.9 roll misses
    let mut engine = create_test_battle(
        &mut party,
        &mut wild,
        BattleType::Wild,
        scripted(&[&[0.9][..], &WILD_ATTACK[..]]),
    );
    let outcome = assert_ok(engine.submit_action(BattleAction::Attack { move_id: HYDRO_PUMP }));

    let miss = &outcome.turn_results[0];
    assert!(miss.missed);
    assert_eq!(miss.damage, 0);
    assert!(!miss.is_critical);
    assert_eq!(miss.effectiveness, 1.0);
    assert_eq!(miss.defender_remaining_hp, wild_hp);
    assert_eq!(outcome.turn_results.len(), 2);
}
