use crate::monster::MonsterInst;
use schema::{ItemData, ItemEffect};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("Need {needed} gold but only have {available}")]
    InsufficientGold { needed: u32, available: u32 },
    #[error("Need {requested} of item {item_id} but only have {available}")]
    NotEnoughItems {
        item_id: u16,
        requested: u32,
        available: u32,
    },
    #[error("{0} would have no effect")]
    NoEffect(String),
}

/// Gold and item counts carried by the player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    gold: u32,
    items: BTreeMap<u16, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    pub fn spend_gold(&mut self, amount: u32) -> Result<(), InventoryError> {
        if self.gold < amount {
            return Err(InventoryError::InsufficientGold {
                needed: amount,
                available: self.gold,
            });
        }
        self.gold -= amount;
        Ok(())
    }

    pub fn add_item(&mut self, item_id: u16, quantity: u32) {
        if quantity == 0 {
            return;
        }
        let count = self.items.entry(item_id).or_insert(0);
        *count = count.saturating_add(quantity);
    }

    pub fn remove_item(&mut self, item_id: u16, quantity: u32) -> Result<(), InventoryError> {
        let available = self.quantity(item_id);
        if available < quantity {
            return Err(InventoryError::NotEnoughItems {
                item_id,
                requested: quantity,
                available,
            });
        }
        if available == quantity {
            self.items.remove(&item_id);
        } else {
            self.items.insert(item_id, available - quantity);
        }
        Ok(())
    }

    pub fn quantity(&self, item_id: u16) -> u32 {
        self.items.get(&item_id).copied().unwrap_or(0)
    }

    pub fn has_item(&self, item_id: u16) -> bool {
        self.quantity(item_id) > 0
    }

    /// `(item_id, quantity)` pairs in id order.
    pub fn list(&self) -> Vec<(u16, u32)> {
        self.items.iter().map(|(&id, &qty)| (id, qty)).collect()
    }

    /// Consume one `item` on `target`. Nothing is consumed if it has no effect.
    pub fn use_healing_item(
        &mut self,
        item: &ItemData,
        target: &mut MonsterInst,
    ) -> Result<(), InventoryError> {
        let available = self.quantity(item.id);
        if available == 0 {
            return Err(InventoryError::NotEnoughItems {
                item_id: item.id,
                requested: 1,
                available,
            });
        }
        if !apply_healing_item(&item.effect, target) {
            return Err(InventoryError::NoEffect(item.name.clone()));
        }
        self.remove_item(item.id, 1)
    }
}

/// Apply a healing effect to `target`. Returns false when the item would be wasted.
pub fn apply_healing_item(effect: &ItemEffect, target: &mut MonsterInst) -> bool {
    match *effect {
        ItemEffect::Heal { amount } => {
            if target.is_fainted() || target.current_hp >= target.max_hp {
                return false;
            }
            target.heal(amount);
            true
        }
        ItemEffect::HealPercent { percent } => {
            let amount = ((target.max_hp as u32 * percent as u32) / 100).max(1) as u16;
            if target.is_fainted() {
                // Revive
                target.set_hp(amount);
            } else {
                if target.current_hp >= target.max_hp {
                    return false;
                }
                target.heal(amount);
            }
            true
        }
        ItemEffect::FullHeal => {
            if target.is_fainted() || target.current_hp >= target.max_hp {
                return false;
            }
            target.set_hp_to_max();
            true
        }
        ItemEffect::Capture { .. } | ItemEffect::KeyItem => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::GameData;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn damaged(hp: u16) -> MonsterInst {
        let mut mon = MonsterInst::new(4, 20, GameData::builtin()).unwrap();
        mon.set_hp(hp);
        mon
    }

    #[test]
    fn test_gold() {
        let mut inv = Inventory::new();
        inv.add_gold(100);
        assert_eq!(inv.spend_gold(30), Ok(()));
        assert_eq!(inv.gold(), 70);
        assert_eq!(
            inv.spend_gold(71),
            Err(InventoryError::InsufficientGold {
                needed: 71,
                available: 70
            })
        );
        assert_eq!(inv.gold(), 70);
    }

    #[test]
    fn test_item_counts() {
        let mut inv = Inventory::new();
        inv.add_item(5, 3);
        inv.add_item(1, 1);
        inv.add_item(9, 0);
        assert_eq!(inv.list(), vec![(1, 1), (5, 3)]);

        assert!(inv.remove_item(5, 4).is_err());
        assert_eq!(inv.remove_item(5, 3), Ok(()));
        assert!(!inv.has_item(5));
        assert_eq!(inv.list(), vec![(1, 1)]);
    }

    #[rstest]
    #[case::heal_partial(ItemEffect::Heal { amount: 20 }, 10, true, 30)]
    #[case::heal_caps_at_max(ItemEffect::Heal { amount: 200 }, 10, true, u16::MAX)]
    #[case::heal_fainted(ItemEffect::Heal { amount: 20 }, 0, false, 0)]
    #[case::full_heal(ItemEffect::FullHeal, 1, true, u16::MAX)]
    #[case::full_heal_fainted(ItemEffect::FullHeal, 0, false, 0)]
    #[case::revive(ItemEffect::HealPercent { percent: 50 }, 0, true, 0)]
    #[case::capture_does_nothing(ItemEffect::Capture { multiplier: 1.0 }, 10, false, 10)]
    fn test_apply_healing_item(
        #[case] effect: ItemEffect,
        #[case] start_hp: u16,
        #[case] used: bool,
        #[case] expected_hp: u16,
    ) {
        let mut mon = damaged(start_hp);
        let half = ((mon.max_hp as u32 * 50) / 100).max(1) as u16;
        assert_eq!(apply_healing_item(&effect, &mut mon), used);
        let expected = match expected_hp {
            u16::MAX => mon.max_hp,
            0 if used => half,
            hp => hp,
        };
        assert_eq!(mon.current_hp, expected);
    }

    #[test]
    fn test_items_fail_at_full_hp() {
        let mut mon = damaged(u16::MAX);
        for effect in [
            ItemEffect::Heal { amount: 20 },
            ItemEffect::HealPercent { percent: 50 },
            ItemEffect::FullHeal,
        ] {
            assert!(!apply_healing_item(&effect, &mut mon));
        }
    }

    #[test]
    fn test_use_healing_item_consumes_only_on_success() {
        let data = GameData::builtin();
        let potion = data.item(1).unwrap();
        let mut inv = Inventory::new();
        inv.add_item(potion.id, 1);

        let mut full = damaged(u16::MAX);
        assert_eq!(
            inv.use_healing_item(potion, &mut full),
            Err(InventoryError::NoEffect("Potion".to_string()))
        );
        assert_eq!(inv.quantity(potion.id), 1);

        let mut hurt = damaged(5);
        assert_eq!(inv.use_healing_item(potion, &mut hurt), Ok(()));
        assert_eq!(inv.quantity(potion.id), 0);
        assert!(inv.use_healing_item(potion, &mut hurt).is_err());
    }
}
