use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemCategory {
    Healing,
    Capture,
    KeyItem,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ItemEffect {
    /// Restore a flat amount of HP
    Heal { amount: u16 },
    /// Restore a percentage of max HP, reviving a fainted monster
    HealPercent { percent: u8 },
    /// Restore all HP
    FullHeal,
    /// Thrown in battle; scales the capture chance
    Capture { multiplier: f64 },
    KeyItem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemData {
    pub id: u16,
    pub name: String,
    pub description: String,
    pub category: ItemCategory,
    pub effect: ItemEffect,
    pub price: u32,
}

impl ItemData {
    /// The catch multiplier this item applies, if it is a capture item.
    pub fn catch_multiplier(&self) -> Option<f64> {
        match self.effect {
            ItemEffect::Capture { multiplier } => Some(multiplier),
            _ => None,
        }
    }
}
