//! Snapshot system: projects the world into the broadcast `GameStateSnapshot`.
//!
//! Read-only: it never modifies the world.

use bastion_core::state::GameStateSnapshot;

use crate::world::WorldState;

/// Build a complete snapshot, resolving both weapon locks to full objects.
pub fn build_snapshot(world: &WorldState) -> GameStateSnapshot {
    GameStateSnapshot {
        available_units: world.available_units.clone(),
        individuals_in_transit: world.individuals_in_transit.clone(),
        groups_in_transit: world.groups_in_transit.clone(),
        score: world.score,
        breach_count: world.breach_count,
        escaped_count: world.escaped_count,
        last_events: world.last_events.iter().map(ToString::to_string).collect(),
        squads: world.squads.clone(),
        processing_individual_unit: world.locked_unit().cloned(),
        processing_group: world.locked_group().cloned(),
    }
}
