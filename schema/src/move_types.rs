use crate::MonsterType;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

impl fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveCategory::Physical => write!(f, "Physical"),
            MoveCategory::Special => write!(f, "Special"),
            MoveCategory::Status => write!(f, "Status"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub id: u16,
    pub name: String,
    pub move_type: MonsterType,
    /// 0 for status moves
    pub power: u16,
    /// Percentage chance to hit, 0-100
    pub accuracy: u8,
    pub category: MoveCategory,
    pub pp: u8,
    pub description: String,
}

impl MoveData {
    pub fn is_damaging(&self) -> bool {
        self.power > 0
    }
}
