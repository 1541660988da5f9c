//! Typed configuration bundle consumed by the engine.
//!
//! The on-disk format is camelCase JSON:
//!
//! ```json
//! {
//!   "rates":   { "spawnRateMs": 3000, "individualWeaponRateMs": 500,
//!                "groupWeaponRateMs": 1000, "ttlCheckRateMs": 100 },
//!   "timing":  { "battlefieldTtlSec": 20.0, "transitTtlSec": 15.0 },
//!   "scoring": { "points": { "soldier": 10, "tank": 50, "helicopter": 30 },
//!                "penalties": { "escape": 5, "breach": 25 } },
//!   "units":   { "hitpoints": { "soldier": 10, "tank": 50, "helicopter": 30 } },
//!   "weapons": { "processingPower": { "individual": 10, "group": 5 } }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{FALLBACK_HITPOINTS, FALLBACK_POINTS};
use crate::enums::UnitType;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rates: Rates,
    pub timing: Timing,
    pub scoring: Scoring,
    pub units: Units,
    pub weapons: Weapons,
}

/// Timer periods in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rates {
    pub spawn_rate_ms: u64,
    pub individual_weapon_rate_ms: u64,
    pub group_weapon_rate_ms: u64,
    pub ttl_check_rate_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timing {
    /// Lifetime of an idle unit, in seconds.
    pub battlefield_ttl_sec: f64,
    /// Lifetime of a deployed unit or group, in seconds.
    pub transit_ttl_sec: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scoring {
    pub points: BTreeMap<UnitType, i64>,
    pub penalties: Penalties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Penalties {
    pub escape: i64,
    pub breach: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Units {
    pub hitpoints: BTreeMap<UnitType, i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapons {
    #[serde(rename = "processingPower")]
    pub processing_power: ProcessingPower,
}

/// Damage dealt per weapon tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingPower {
    pub individual: i32,
    pub group: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rates: Rates {
                spawn_rate_ms: 3000,
                individual_weapon_rate_ms: 500,
                group_weapon_rate_ms: 1000,
                ttl_check_rate_ms: 100,
            },
            timing: Timing {
                battlefield_ttl_sec: 20.0,
                transit_ttl_sec: 15.0,
            },
            scoring: Scoring {
                points: BTreeMap::from([
                    (UnitType::Soldier, 10),
                    (UnitType::Tank, 50),
                    (UnitType::Helicopter, 30),
                ]),
                penalties: Penalties {
                    escape: 5,
                    breach: 25,
                },
            },
            units: Units {
                hitpoints: BTreeMap::from([
                    (UnitType::Soldier, 10),
                    (UnitType::Tank, 50),
                    (UnitType::Helicopter, 30),
                ]),
            },
            weapons: Weapons {
                processing_power: ProcessingPower {
                    individual: 10,
                    group: 5,
                },
            },
        }
    }
}

impl GameConfig {
    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate a JSON config string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the loop cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rates = [
            ("rates.spawnRateMs", self.rates.spawn_rate_ms),
            ("rates.individualWeaponRateMs", self.rates.individual_weapon_rate_ms),
            ("rates.groupWeaponRateMs", self.rates.group_weapon_rate_ms),
            ("rates.ttlCheckRateMs", self.rates.ttl_check_rate_ms),
        ];
        for (field, ms) in rates {
            if ms == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "timer period must be at least 1 ms".into(),
                });
            }
        }

        let ttls = [
            ("timing.battlefieldTtlSec", self.timing.battlefield_ttl_sec),
            ("timing.transitTtlSec", self.timing.transit_ttl_sec),
        ];
        for (field, secs) in ttls {
            if !(secs.is_finite() && secs > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive number of seconds, got {secs}"),
                });
            }
        }

        if let Some((unit_type, hp)) = self.units.hitpoints.iter().find(|(_, hp)| **hp <= 0) {
            return Err(ConfigError::Invalid {
                field: "units.hitpoints",
                reason: format!("{unit_type} must have positive hit points, got {hp}"),
            });
        }

        let power = [
            ("weapons.processingPower.individual", self.weapons.processing_power.individual),
            ("weapons.processingPower.group", self.weapons.processing_power.group),
        ];
        for (field, damage) in power {
            if damage <= 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("weapon damage must be positive, got {damage}"),
                });
            }
        }

        Ok(())
    }

    pub fn spawn_period(&self) -> Duration {
        Duration::from_millis(self.rates.spawn_rate_ms)
    }

    pub fn individual_weapon_period(&self) -> Duration {
        Duration::from_millis(self.rates.individual_weapon_rate_ms)
    }

    pub fn group_weapon_period(&self) -> Duration {
        Duration::from_millis(self.rates.group_weapon_rate_ms)
    }

    pub fn ttl_check_period(&self) -> Duration {
        Duration::from_millis(self.rates.ttl_check_rate_ms)
    }

    /// Seconds removed from every TTL on each TTL-check tick.
    pub fn tick_delta_secs(&self) -> f64 {
        self.rates.ttl_check_rate_ms as f64 / 1000.0
    }

    /// Points awarded for destroying a unit of this type.
    pub fn points_for(&self, unit_type: UnitType) -> i64 {
        self.scoring
            .points
            .get(&unit_type)
            .copied()
            .unwrap_or(FALLBACK_POINTS)
    }

    /// Hit points a freshly spawned unit of this type starts with.
    pub fn hitpoints_for(&self, unit_type: UnitType) -> i32 {
        self.units
            .hitpoints
            .get(&unit_type)
            .copied()
            .unwrap_or(FALLBACK_HITPOINTS)
    }
}
