//! Battle simulator: pits generated parties against each other and prints
//! every event. The player's moves are picked by the trainer AI.

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use spirit_collectors::battle::ai::{Behavior, GreedyBehavior, Matchup};
use spirit_collectors::progression::apply_battle_rewards;
use spirit_collectors::{
    BattleAction, BattleEngine, BattlePhase, BattleRewards, BattleType, GameData, GameRng,
    Inventory, MonsterInst, PartyManager, Winner,
};
use std::path::PathBuf;

/// Item id of the capture orb thrown with `--orbs`.
const ORB_ITEM_ID: u16 = 5;

#[derive(Parser, Debug)]
#[command(name = "spirit-collectors", about = "Simulate a Spirit Collectors battle")]
struct Args {
    /// Load monsters.ron, moves.ron and items.ron from this directory instead
    /// of the compiled-in data
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Player species by name or id; repeat for a larger party
    #[arg(long = "player", default_value = "emberpup")]
    player: Vec<String>,

    #[arg(long, default_value_t = 12)]
    player_level: u8,

    /// Opponent species by name or id; repeat for a trainer party.
    /// A random species is used when omitted
    #[arg(long = "opponent")]
    opponent: Vec<String>,

    #[arg(long, default_value_t = 10)]
    opponent_level: u8,

    /// Fight a trainer instead of a wild encounter
    #[arg(long)]
    trainer: bool,

    /// Capture orbs to throw at a weakened wild opponent
    #[arg(long, default_value_t = 0)]
    orbs: u32,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 100)]
    max_turns: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let loaded;
    let data: &GameData = match &args.data_dir {
        Some(dir) => {
            loaded = GameData::load_from_dir(dir)
                .with_context(|| format!("loading data from {}", dir.display()))?;
            &loaded
        }
        None => GameData::builtin(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    println!("Seed: {seed}");
    let mut setup_rng = GameRng::from_seed(seed);
    let mut policy_rng = GameRng::from_seed(seed.wrapping_add(1));
    let battle_rng = GameRng::from_seed(seed.wrapping_add(2));

    let mut party_manager = PartyManager::new();
    for name in &args.player {
        let species_id = resolve_species(data, name)?;
        party_manager.add_monster(MonsterInst::new(species_id, args.player_level, data)?)?;
    }

    let mut opponents = build_opponents(&args, data, &mut setup_rng)?;
    let battle_type = if args.trainer {
        BattleType::Trainer
    } else {
        BattleType::Wild
    };

    let mut inventory = Inventory::new();
    inventory.add_item(ORB_ITEM_ID, args.orbs);
    let orb_multiplier = data.item(ORB_ITEM_ID).and_then(|item| item.catch_multiplier());

    // Rewards are paid out after the battle, to whoever was active at the knockout
    let mut earned: Vec<(usize, BattleRewards)> = Vec::new();

    let (winner, caught) = {
        let mut engine = BattleEngine::new(
            &mut party_manager.party,
            &mut opponents,
            data,
            battle_type,
            battle_rng,
        )?;
        print_matchup(&engine, data)?;

        let mut turns = 0;
        while !engine.is_over() && turns < args.max_turns {
            match engine.phase() {
                BattlePhase::NeedsPlayerSwitch => {
                    let index = engine
                        .party()
                        .iter()
                        .position(MonsterInst::is_alive)
                        .ok_or_else(|| anyhow!("switch requested with nobody left"))?;
                    engine.force_switch(index);
                    println!("Go, {}!", name_of(engine.active_monster(), data)?);
                    continue;
                }
                BattlePhase::NeedsOpponentAdvance => {
                    engine.advance_opponent();
                    println!("The trainer sends out {}!", name_of(engine.opponent_monster(), data)?);
                    continue;
                }
                BattlePhase::Active | BattlePhase::Over(_) => {}
            }
            turns += 1;

            let action = choose_action(&engine, data, &mut inventory, orb_multiplier, &mut policy_rng)?;
            let active_index = engine.active_index();
            let outcome = engine.submit_action(action)?;

            if let Some(catch) = outcome.catch_result {
                if catch.success {
                    println!("Gotcha! The wild monster was caught after {} shakes.", catch.shakes);
                } else {
                    println!("Oh no! It broke free after {} shakes.", catch.shakes);
                }
            }
            for event in &outcome.turn_results {
                println!("{event}");
            }
            if let Some(rewards) = outcome.rewards {
                earned.push((active_index, rewards));
            }
        }

        if !engine.is_over() {
            println!("Turn limit of {} reached.", args.max_turns);
        }
        (engine.winner(), engine.caught())
    };

    match winner {
        Some(Winner::Player) => println!("You won!"),
        Some(Winner::Opponent) => println!("You blacked out..."),
        None => println!("The battle ended without a winner."),
    }

    if caught {
        if let Some(wild) = opponents.first() {
            let location = party_manager.add_monster(wild.clone())?;
            println!("The new monster was stored at {location:?}.");
        }
    }

    for (index, rewards) in earned {
        let recipient = &mut party_manager.party[index];
        let name = name_of(recipient, data)?;
        println!("{name} gained {} XP. You picked up {} gold.", rewards.xp, rewards.gold);
        for level_up in apply_battle_rewards(&rewards, recipient, &mut inventory, data)? {
            println!("{name} grew to level {}!", level_up.new_level);
            for move_id in &level_up.new_moves {
                println!("  {name} can now learn {}.", data.move_data(*move_id)?.name);
            }
            if let Some(candidate) = &level_up.evolution {
                println!("  {name} is ready to evolve into {}!", candidate.species_name);
            }
        }
    }
    println!("Gold: {}", inventory.gold());

    Ok(())
}

fn resolve_species(data: &GameData, name: &str) -> Result<u16> {
    if let Ok(id) = name.parse::<u16>() {
        data.species(id)?;
        return Ok(id);
    }
    data.all_species()
        .iter()
        .find(|species| species.name.eq_ignore_ascii_case(name))
        .map(|species| species.id)
        .or_else(|| GameData::builtin_species_id(name))
        .ok_or_else(|| anyhow!("Unknown species '{name}'"))
}

fn build_opponents(args: &Args, data: &GameData, rng: &mut GameRng) -> Result<Vec<MonsterInst>> {
    let mut species_ids = args
        .opponent
        .iter()
        .map(|name| resolve_species(data, name))
        .collect::<Result<Vec<_>>>()?;
    if species_ids.is_empty() {
        let species = data
            .random_species(rng)
            .ok_or_else(|| anyhow!("The species database is empty"))?;
        species_ids.push(species.id);
    }
    if !args.trainer && species_ids.len() > 1 {
        bail!("Wild encounters have exactly one opponent");
    }

    species_ids
        .into_iter()
        .map(|id| MonsterInst::new(id, args.opponent_level, data).map_err(anyhow::Error::from))
        .collect()
}

/// Throw an orb at a weakened wild opponent if one is left, otherwise attack.
fn choose_action(
    engine: &BattleEngine<'_>,
    data: &GameData,
    inventory: &mut Inventory,
    orb_multiplier: Option<f64>,
    rng: &mut GameRng,
) -> Result<BattleAction> {
    let opponent = engine.opponent_monster();
    let weakened = opponent.current_hp <= opponent.max_hp / 4;
    if engine.battle_type() == BattleType::Wild && weakened && inventory.has_item(ORB_ITEM_ID) {
        inventory.remove_item(ORB_ITEM_ID, 1)?;
        return Ok(BattleAction::Catch {
            multiplier: orb_multiplier,
        });
    }

    let attacker = engine.active_monster();
    let matchup = Matchup {
        attacker,
        attacker_species: data.species(attacker.species_id)?,
        defender: opponent,
        defender_species: data.species(opponent.species_id)?,
    };
    let move_id = GreedyBehavior.choose_move(&matchup, data, rng)?;
    Ok(BattleAction::Attack { move_id })
}

fn print_matchup(engine: &BattleEngine<'_>, data: &GameData) -> Result<()> {
    let intro = match engine.battle_type() {
        BattleType::Wild => "A wild",
        BattleType::Trainer => "The trainer sends out",
    };
    let opponent = engine.opponent_monster();
    println!(
        "{intro} {} (Lv. {}) appeared!",
        name_of(opponent, data)?,
        opponent.level
    );
    let active = engine.active_monster();
    println!("Go, {} (Lv. {})!", name_of(active, data)?, active.level);
    Ok(())
}

fn name_of(monster: &MonsterInst, data: &GameData) -> Result<String> {
    let species = data.species(monster.species_id)?;
    Ok(monster.display_name(species).to_string())
}
