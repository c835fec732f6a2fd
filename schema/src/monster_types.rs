use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum MonsterType {
    Fire,
    Water,
    Grass,
    Electric,
    Normal,
    Ice,
    Fighting,
    Poison,
    Ground,
    Dragon,
}

impl MonsterType {
    /// Multiplier for a single attacking type against a single defending type.
    /// Returns: 2.0 = Super Effective, 1.0 = Neutral, 0.5 = Not Very Effective, 0.0 = No Effect
    ///
    /// Pairs the chart does not list are neutral.
    pub fn type_effectiveness(attacking: MonsterType, defending: MonsterType) -> f64 {
        use MonsterType::*;

        match (attacking, defending) {
            // Fire
            (Fire, Grass) | (Fire, Ice) => 2.0,
            (Fire, Water) | (Fire, Fire) => 0.5,

            // Water
            (Water, Fire) | (Water, Ground) => 2.0,
            (Water, Grass) | (Water, Water) => 0.5,

            // Grass
            (Grass, Water) | (Grass, Ground) => 2.0,
            (Grass, Fire) | (Grass, Grass) => 0.5,

            // Electric
            (Electric, Water) => 2.0,
            (Electric, Grass) | (Electric, Electric) => 0.5,
            (Electric, Ground) => 0.0,

            // Ice
            (Ice, Grass) | (Ice, Dragon) => 2.0,
            (Ice, Fire) | (Ice, Water) | (Ice, Ice) => 0.5,

            // Ground
            (Ground, Fire) | (Ground, Electric) | (Ground, Poison) => 2.0,
            (Ground, Grass) => 0.5,

            // Fighting
            (Fighting, Normal) | (Fighting, Ice) => 2.0,
            (Fighting, Dragon) => 0.5,

            // Poison
            (Poison, Grass) => 2.0,
            (Poison, Poison) | (Poison, Ground) => 0.5,

            // Dragon
            (Dragon, Dragon) => 2.0,

            _ => 1.0,
        }
    }

    /// Combined multiplier of an attack against every type the defender has.
    /// Dual types multiply, so results are 0, 0.25, 0.5, 1, 2 or 4.
    pub fn effectiveness(attacking: MonsterType, defending: &[MonsterType]) -> f64 {
        defending
            .iter()
            .map(|&defender| Self::type_effectiveness(attacking, defender))
            .product()
    }

    pub fn is_immune(attacking: MonsterType, defending: MonsterType) -> bool {
        Self::type_effectiveness(attacking, defending) == 0.0
    }
}
