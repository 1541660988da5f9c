//! Enumeration types used throughout the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hostile unit archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    Soldier,
    Tank,
    Helicopter,
}

impl UnitType {
    /// Every archetype a tower can spawn, in a stable order.
    pub const ALL: [UnitType; 3] = [UnitType::Soldier, UnitType::Tank, UnitType::Helicopter];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitType::Soldier => "soldier",
            UnitType::Tank => "tank",
            UnitType::Helicopter => "helicopter",
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
