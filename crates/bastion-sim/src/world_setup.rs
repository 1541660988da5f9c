//! Entity construction: ids, towers and freshly spawned units.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bastion_core::config::GameConfig;
use bastion_core::constants::TOWER_IDS;
use bastion_core::enums::UnitType;
use bastion_core::types::{Tower, Unit, UnitId};

use crate::world::WorldState;

/// A v4 UUID drawn from the simulation RNG, so seeded runs reproduce their ids.
pub fn fresh_id(rng: &mut ChaCha8Rng) -> String {
    uuid::Builder::from_random_bytes(rng.gen())
        .into_uuid()
        .to_string()
}

/// The three fixed towers.
pub fn default_towers() -> Vec<Tower> {
    TOWER_IDS.iter().map(|id| Tower::new(*id)).collect()
}

/// Pick a spawn type uniformly.
pub fn random_unit_type(rng: &mut ChaCha8Rng) -> UnitType {
    UnitType::ALL[rng.gen_range(0..UnitType::ALL.len())]
}

/// Create an idle unit with full battlefield TTL and hit points for its type,
/// and place it on the battlefield.
pub fn spawn_unit(
    world: &mut WorldState,
    rng: &mut ChaCha8Rng,
    config: &GameConfig,
    unit_type: UnitType,
) -> UnitId {
    let id = UnitId::new(fresh_id(rng));
    let unit = Unit::new(
        id.clone(),
        unit_type,
        config.timing.battlefield_ttl_sec,
        config.hitpoints_for(unit_type),
        unix_now(),
    );
    world.available_units.insert(id.clone(), unit);
    id
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}

