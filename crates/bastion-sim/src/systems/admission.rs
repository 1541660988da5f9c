//! Admission system: hands a free weapon its next queued target.

use tracing::info;

use bastion_core::events::GameEvent;
use bastion_core::types::{GroupId, UnitId};

use crate::targeting::AdmissionQueue;
use crate::world::WorldState;

/// Lock the individual weapon on the next live queued unit, if the lock is free.
/// Returns true when a new lock was taken.
pub fn admit_individual(world: &mut WorldState, queue: &mut AdmissionQueue<UnitId>) -> bool {
    if world.processing_individual_unit.is_some() || queue.is_empty() {
        return false;
    }
    let transit = &world.individuals_in_transit;
    let Some(id) = queue.admit_next(|id| transit.contains_key(id)) else {
        return false;
    };
    info!(unit = %id, "individual weapon locked on");
    world.processing_individual_unit = Some(id.clone());
    world.record(GameEvent::LockOnIndividual(id));
    true
}

/// Lock the group weapon on the next live queued group, if the lock is free.
/// Returns true when a new lock was taken.
pub fn admit_group(world: &mut WorldState, queue: &mut AdmissionQueue<GroupId>) -> bool {
    if world.processing_group.is_some() || queue.is_empty() {
        return false;
    }
    let transit = &world.groups_in_transit;
    let Some(id) = queue.admit_next(|id| transit.contains_key(id)) else {
        return false;
    };
    info!(group = %id, "group weapon locked on");
    world.processing_group = Some(id.clone());
    world.record(GameEvent::LockOnGroup(id));
    true
}
