//! TTL decay system.
//!
//! Runs three independent passes per TTL tick, in this order: battlefield
//! escapes, individual breaches, group breaches. Each pass decrements every
//! clock first and removes expired entries afterwards. A locked target keeps
//! decaying but cannot breach; it only leaves transit by being destroyed.

use tracing::info;

use bastion_core::config::GameConfig;
use bastion_core::events::GameEvent;
use bastion_core::types::{GroupId, UnitId};

use crate::world::WorldState;

/// Counts of what expired in one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecayReport {
    pub escaped: u32,
    pub breached_individuals: u32,
    pub breached_groups: u32,
}

pub fn run(world: &mut WorldState, config: &GameConfig) -> DecayReport {
    let dt = config.tick_delta_secs();
    DecayReport {
        escaped: expire_idle_units(world, config, dt),
        breached_individuals: expire_individuals(world, config, dt),
        breached_groups: expire_groups(world, config, dt),
    }
}

fn expire_idle_units(world: &mut WorldState, config: &GameConfig, dt: f64) -> u32 {
    let mut escaped: Vec<UnitId> = Vec::new();
    for unit in world.available_units.values_mut() {
        unit.ttl -= dt;
        if unit.ttl <= 0.0 {
            escaped.push(unit.id.clone());
        }
    }

    let mut count = 0;
    for id in escaped {
        if world.available_units.remove(&id).is_some() {
            world.score -= config.scoring.penalties.escape;
            world.escaped_count += 1;
            info!(unit = %id, "unit escaped");
            world.record(GameEvent::Escape(id));
            count += 1;
        }
    }
    count
}

fn expire_individuals(world: &mut WorldState, config: &GameConfig, dt: f64) -> u32 {
    let mut expired: Vec<UnitId> = Vec::new();
    for unit in world.individuals_in_transit.values_mut() {
        unit.transit_ttl -= dt;
        if unit.transit_ttl <= 0.0 {
            expired.push(unit.id.clone());
        }
    }

    let mut count = 0;
    for id in expired {
        if world.is_locked_unit(&id) {
            continue;
        }
        if world.individuals_in_transit.remove(&id).is_some() {
            world.score -= config.scoring.penalties.breach;
            world.breach_count += 1;
            info!(unit = %id, "individual breached");
            world.record(GameEvent::BreachIndividual(id));
            count += 1;
        }
    }
    count
}

fn expire_groups(world: &mut WorldState, config: &GameConfig, dt: f64) -> u32 {
    let mut expired: Vec<GroupId> = Vec::new();
    for group in world.groups_in_transit.values_mut() {
        group.transit_ttl -= dt;
        if group.transit_ttl <= 0.0 {
            expired.push(group.id.clone());
        }
    }

    let mut count = 0;
    for id in expired {
        if world.is_locked_group(&id) {
            continue;
        }
        if world.groups_in_transit.remove(&id).is_some() {
            world.score -= config.scoring.penalties.breach;
            world.breach_count += 1;
            info!(group = %id, "group breached");
            world.record(GameEvent::BreachGroup(id));
            count += 1;
        }
    }
    count
}
