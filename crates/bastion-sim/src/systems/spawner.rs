//! Spawn system: every tower puts one random unit on the battlefield per spawn tick.

use rand_chacha::ChaCha8Rng;
use tracing::debug;

use bastion_core::config::GameConfig;
use bastion_core::types::{Tower, UnitId};

use crate::world::WorldState;
use crate::world_setup;

/// Spawn one unit per tower. Returns the new ids in tower order.
pub fn run(
    world: &mut WorldState,
    rng: &mut ChaCha8Rng,
    towers: &[Tower],
    config: &GameConfig,
) -> Vec<UnitId> {
    towers
        .iter()
        .map(|tower| {
            let unit_type = world_setup::random_unit_type(rng);
            let id = world_setup::spawn_unit(world, rng, config, unit_type);
            debug!(tower = %tower.id, unit = %id, %unit_type, "unit spawned");
            id
        })
        .collect()
}
