//! Command processor: applies operator intents to the world.
//!
//! Every command is total. Ids that are no longer on the battlefield are
//! skipped silently; the next snapshot is the operator's only feedback.

use std::collections::BTreeMap;

use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use bastion_core::commands::Command;
use bastion_core::config::GameConfig;
use bastion_core::enums::UnitType;
use bastion_core::types::{Group, GroupId, Squad, SquadId, Unit, UnitId};

use crate::targeting::AdmissionQueue;
use crate::world::WorldState;
use crate::world_setup::fresh_id;

/// Apply one command.
pub fn run(
    world: &mut WorldState,
    rng: &mut ChaCha8Rng,
    config: &GameConfig,
    individual_queue: &mut AdmissionQueue<UnitId>,
    group_queue: &mut AdmissionQueue<GroupId>,
    command: Command,
) {
    match command {
        Command::CreateSquad { unit_ids } => {
            create_squad(world, rng, &unit_ids);
        }
        Command::DeployIndividuals { unit_ids } => {
            deploy_individuals(world, config, individual_queue, &unit_ids);
        }
        Command::DeploySquad { squad_id } => {
            deploy_squad(world, rng, config, group_queue, &squad_id);
        }
    }
}

/// Record a template from the types of the referenced idle units.
/// The units are neither removed nor reserved.
pub fn create_squad(
    world: &mut WorldState,
    rng: &mut ChaCha8Rng,
    unit_ids: &[UnitId],
) -> Option<SquadId> {
    let mut composition: BTreeMap<UnitType, u32> = BTreeMap::new();
    for id in unit_ids {
        if let Some(unit) = world.available_units.get(id) {
            *composition.entry(unit.unit_type).or_default() += 1;
        }
    }

    if composition.is_empty() {
        return None;
    }

    let squad = Squad::new(SquadId::new(fresh_id(rng)), composition);
    info!(squad = %squad.id, size = squad.size(), "squad created");
    let id = squad.id.clone();
    world.squads.insert(id.clone(), squad);
    Some(id)
}

/// Move idle units into transit and queue each for the individual weapon.
/// Returns how many were deployed.
pub fn deploy_individuals(
    world: &mut WorldState,
    config: &GameConfig,
    individual_queue: &mut AdmissionQueue<UnitId>,
    unit_ids: &[UnitId],
) -> usize {
    let mut deployed = 0;
    for id in unit_ids {
        let Some(mut unit) = world.available_units.remove(id) else {
            continue;
        };
        if let Err(rejected) = individual_queue.try_push(id.clone()) {
            warn!(unit = %rejected, capacity = individual_queue.capacity(), "individual queue full, unit kept on battlefield");
            world.available_units.insert(rejected, unit);
            continue;
        }
        unit.dispatch(config.timing.transit_ttl_sec);
        world.individuals_in_transit.insert(id.clone(), unit);
        deployed += 1;
    }
    if deployed > 0 {
        info!(count = deployed, "individuals deployed");
    }
    deployed
}

/// Pull as many units as the battlefield can supply for a squad template and
/// send them as one group. Short supply deploys a partial group; no supply
/// deploys nothing.
pub fn deploy_squad(
    world: &mut WorldState,
    rng: &mut ChaCha8Rng,
    config: &GameConfig,
    group_queue: &mut AdmissionQueue<GroupId>,
    squad_id: &SquadId,
) -> Option<GroupId> {
    let composition = world.squads.get(squad_id)?.composition.clone();

    let mut pool: BTreeMap<UnitType, Vec<UnitId>> = BTreeMap::new();
    for unit in world.available_units.values() {
        pool.entry(unit.unit_type).or_default().push(unit.id.clone());
    }

    let mut members: Vec<Unit> = Vec::new();
    for (unit_type, required) in composition {
        let Some(candidates) = pool.get(&unit_type) else {
            continue;
        };
        let take = (required as usize).min(candidates.len());
        for id in &candidates[..take] {
            if let Some(unit) = world.available_units.remove(id) {
                members.push(unit);
            }
        }
    }

    if members.is_empty() {
        return None;
    }

    let id = GroupId::new(fresh_id(rng));
    if group_queue.try_push(id.clone()).is_err() {
        warn!(squad = %squad_id, capacity = group_queue.capacity(), "group queue full, squad not deployed");
        for unit in members {
            world.available_units.insert(unit.id.clone(), unit);
        }
        return None;
    }

    let mut group = Group::new(id.clone(), members);
    group.dispatch(config.timing.transit_ttl_sec);
    info!(group = %id, squad = %squad_id, size = group.units.len(), "squad deployed");
    world.groups_in_transit.insert(id.clone(), group);
    Some(id)
}
