use crate::{ItemData, MonsterSpecies, MoveData};
use std::collections::HashSet;

/// Cross-reference checks over a full static catalog.
///
/// Returns one human-readable problem per broken reference; an empty vector
/// means the catalog is usable by the battle engine.
pub fn validate_catalog(
    species: &[MonsterSpecies],
    moves: &[MoveData],
    items: &[ItemData],
) -> Vec<String> {
    let mut problems = Vec::new();

    let move_ids: HashSet<u16> = moves.iter().map(|m| m.id).collect();
    let species_ids: HashSet<u16> = species.iter().map(|s| s.id).collect();

    if move_ids.len() != moves.len() {
        problems.push("duplicate move ids".to_string());
    }
    if species_ids.len() != species.len() {
        problems.push("duplicate species ids".to_string());
    }
    let item_ids: HashSet<u16> = items.iter().map(|i| i.id).collect();
    if item_ids.len() != items.len() {
        problems.push("duplicate item ids".to_string());
    }

    for mv in moves {
        if mv.accuracy > 100 {
            problems.push(format!("move {} ({}) has accuracy {}", mv.id, mv.name, mv.accuracy));
        }
    }

    for s in species {
        if s.types.is_empty() || s.types.len() > 2 {
            problems.push(format!("species {} ({}) has {} types", s.id, s.name, s.types.len()));
        }
        if s.movepool.is_empty() {
            problems.push(format!("species {} ({}) has an empty movepool", s.id, s.name));
        }
        for entry in &s.movepool {
            if !move_ids.contains(&entry.move_id) {
                problems.push(format!(
                    "species {} ({}) references unknown move {}",
                    s.id, s.name, entry.move_id
                ));
            }
        }
        if let Some(evolution) = &s.evolves_to {
            if !species_ids.contains(&evolution.species_id) {
                problems.push(format!(
                    "species {} ({}) evolves into unknown species {}",
                    s.id, s.name, evolution.species_id
                ));
            }
        }
    }

    problems
}
