//! Entities of the battlefield: units, groups, squads and towers.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::UnitType;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }
    };
}

string_id!(
    /// Globally unique unit identity.
    UnitId
);
string_id!(
    /// Identity of a deployed group.
    GroupId
);
string_id!(
    /// Identity of a squad template.
    SquadId
);
string_id!(
    /// Identity of a spawning tower.
    TowerId
);

/// A hostile unit.
///
/// Idle units decay `ttl`; deployed units decay `transit_ttl` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: UnitId,
    #[serde(rename = "type")]
    pub unit_type: UnitType,
    /// Seconds left on the battlefield before the unit escapes.
    pub ttl: f64,
    /// Unix seconds at spawn.
    pub creation_time: i64,
    /// Seconds left in transit before the unit breaches.
    pub transit_ttl: f64,
    pub max_transit_ttl: f64,
    pub hp: i32,
    pub max_hp: i32,
}

impl Unit {
    pub fn new(id: UnitId, unit_type: UnitType, ttl: f64, hp: i32, creation_time: i64) -> Self {
        Self {
            id,
            unit_type,
            ttl,
            creation_time,
            transit_ttl: 0.0,
            max_transit_ttl: 0.0,
            hp,
            max_hp: hp,
        }
    }

    /// Start the transit clock.
    pub fn dispatch(&mut self, transit_ttl: f64) {
        self.transit_ttl = transit_ttl;
        self.max_transit_ttl = transit_ttl;
    }

    pub fn is_destroyed(&self) -> bool {
        self.hp <= 0
    }
}

/// Units deployed together from a squad template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub units: Vec<Unit>,
    pub transit_ttl: f64,
    pub max_transit_ttl: f64,
}

impl Group {
    pub fn new(id: GroupId, units: Vec<Unit>) -> Self {
        Self {
            id,
            units,
            transit_ttl: 0.0,
            max_transit_ttl: 0.0,
        }
    }

    /// Start the transit clock.
    pub fn dispatch(&mut self, transit_ttl: f64) {
        self.transit_ttl = transit_ttl;
        self.max_transit_ttl = transit_ttl;
    }
}

/// A deployment template: how many units of each type to pull from the battlefield.
///
/// Holds no live units. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Squad {
    pub id: SquadId,
    pub composition: BTreeMap<UnitType, u32>,
}

impl Squad {
    pub fn new(id: SquadId, composition: BTreeMap<UnitType, u32>) -> Self {
        Self { id, composition }
    }

    /// Total number of units the template asks for.
    pub fn size(&self) -> u32 {
        self.composition.values().sum()
    }
}

/// A spawn point. One spawn attempt per tower per spawn tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tower {
    pub id: TowerId,
}

impl Tower {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: TowerId::new(id),
        }
    }
}
