//! The player's party and long-term storage boxes.

use crate::constants::{BOX_COUNT, BOX_SIZE, MAX_PARTY_SIZE};
use crate::monster::MonsterInst;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartyError {
    #[error("Party slot {0} is empty")]
    InvalidPartyIndex(usize),
    #[error("Box {box_index} slot {slot} does not exist")]
    InvalidBoxSlot { box_index: usize, slot: usize },
    #[error("Box {box_index} slot {slot} is already occupied")]
    SlotOccupied { box_index: usize, slot: usize },
    #[error("Box {box_index} slot {slot} is empty")]
    SlotEmpty { box_index: usize, slot: usize },
    #[error("Party is full")]
    PartyFull,
    #[error("Storage is full")]
    StorageFull,
    #[error("The party needs at least one member able to fight")]
    LastAliveMember,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageLocation {
    Party(usize),
    Box { box_index: usize, slot: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyManager {
    pub party: Vec<MonsterInst>,
    pub boxes: Vec<Vec<Option<MonsterInst>>>,
}

impl Default for PartyManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PartyManager {
    pub fn new() -> Self {
        Self {
            party: Vec::new(),
            boxes: vec![vec![None; BOX_SIZE]; BOX_COUNT],
        }
    }

    /// Bring box storage back to `BOX_COUNT` boxes of `BOX_SIZE` slots.
    /// Used after loading snapshots written with fewer boxes.
    pub fn normalize_boxes(&mut self) {
        if self.boxes.len() < BOX_COUNT {
            self.boxes.resize_with(BOX_COUNT, || vec![None; BOX_SIZE]);
        }
        for storage_box in &mut self.boxes {
            if storage_box.len() < BOX_SIZE {
                storage_box.resize(BOX_SIZE, None);
            }
        }
    }

    /// Put a new monster in the party if there is room, otherwise in the first free box slot.
    pub fn add_monster(&mut self, monster: MonsterInst) -> Result<StorageLocation, PartyError> {
        if self.party.len() < MAX_PARTY_SIZE {
            self.party.push(monster);
            return Ok(StorageLocation::Party(self.party.len() - 1));
        }

        for (box_index, storage_box) in self.boxes.iter_mut().enumerate() {
            if let Some(slot) = storage_box.iter().position(Option::is_none) {
                storage_box[slot] = Some(monster);
                return Ok(StorageLocation::Box { box_index, slot });
            }
        }
        Err(PartyError::StorageFull)
    }

    /// Move a party member into an empty box slot.
    pub fn deposit(&mut self, party_index: usize, box_index: usize, slot: usize) -> Result<(), PartyError> {
        let monster = self
            .party
            .get(party_index)
            .ok_or(PartyError::InvalidPartyIndex(party_index))?;
        if self.party.len() <= 1 {
            return Err(PartyError::LastAliveMember);
        }
        if monster.is_alive() && self.alive_count() <= 1 {
            return Err(PartyError::LastAliveMember);
        }
        if self.box_slot(box_index, slot)?.is_some() {
            return Err(PartyError::SlotOccupied { box_index, slot });
        }

        let monster = self.party.remove(party_index);
        self.boxes[box_index][slot] = Some(monster);
        Ok(())
    }

    /// Move a boxed monster to the end of the party.
    pub fn withdraw(&mut self, box_index: usize, slot: usize) -> Result<(), PartyError> {
        if self.party.len() >= MAX_PARTY_SIZE {
            return Err(PartyError::PartyFull);
        }
        self.box_slot(box_index, slot)?;
        let monster = self.boxes[box_index][slot]
            .take()
            .ok_or(PartyError::SlotEmpty { box_index, slot })?;
        self.party.push(monster);
        Ok(())
    }

    /// Exchange a party member with a boxed monster.
    pub fn swap_party_box(&mut self, party_index: usize, box_index: usize, slot: usize) -> Result<(), PartyError> {
        let party_alive = self
            .party
            .get(party_index)
            .ok_or(PartyError::InvalidPartyIndex(party_index))?
            .is_alive();
        let boxed_alive = match self.box_slot(box_index, slot)? {
            Some(monster) => monster.is_alive(),
            None => return Err(PartyError::SlotEmpty { box_index, slot }),
        };
        if party_alive && self.alive_count() <= 1 && !boxed_alive {
            return Err(PartyError::LastAliveMember);
        }

        if let Some(boxed) = self.boxes[box_index][slot].as_mut() {
            std::mem::swap(boxed, &mut self.party[party_index]);
        }
        Ok(())
    }

    /// Reorder the party. Out of range or identical indices are ignored.
    pub fn swap_party_order(&mut self, a: usize, b: usize) {
        if a != b && a < self.party.len() && b < self.party.len() {
            self.party.swap(a, b);
        }
    }

    pub fn first_alive_index(&self) -> Option<usize> {
        self.party.iter().position(MonsterInst::is_alive)
    }

    pub fn lead_monster(&self) -> Option<&MonsterInst> {
        self.first_alive_index().map(|index| &self.party[index])
    }

    pub fn has_alive_monster(&self) -> bool {
        self.first_alive_index().is_some()
    }

    /// Restore every party member to full HP.
    pub fn heal_all(&mut self) {
        for monster in &mut self.party {
            monster.set_hp_to_max();
        }
    }

    /// Party plus every occupied box slot.
    pub fn total_count(&self) -> usize {
        let boxed: usize = self
            .boxes
            .iter()
            .map(|storage_box| storage_box.iter().flatten().count())
            .sum();
        self.party.len() + boxed
    }

    fn alive_count(&self) -> usize {
        self.party.iter().filter(|m| m.is_alive()).count()
    }

    fn box_slot(&self, box_index: usize, slot: usize) -> Result<Option<&MonsterInst>, PartyError> {
        self.boxes
            .get(box_index)
            .and_then(|storage_box| storage_box.get(slot))
            .map(Option::as_ref)
            .ok_or(PartyError::InvalidBoxSlot { box_index, slot })
    }
}
