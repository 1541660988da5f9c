//! Weapon systems: damage applied to the currently locked targets.

use tracing::{debug, info, warn};

use bastion_core::config::GameConfig;
use bastion_core::events::GameEvent;

use crate::world::WorldState;

/// Outcome of one weapon tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shot {
    /// No target locked; nothing happened.
    Idle,
    /// Damage landed and the target survives.
    Hit,
    /// The target was destroyed and the lock released.
    Destroyed,
}

impl Shot {
    pub fn changed_state(&self) -> bool {
        !matches!(self, Shot::Idle)
    }
}

/// Individual weapon: damage the locked unit; destroy it at zero hit points.
pub fn fire_individual(world: &mut WorldState, config: &GameConfig) -> Shot {
    let Some(id) = world.processing_individual_unit.clone() else {
        return Shot::Idle;
    };
    let Some(target) = world.individuals_in_transit.get_mut(&id) else {
        warn!(unit = %id, "locked unit missing from transit, releasing lock");
        world.processing_individual_unit = None;
        return Shot::Idle;
    };

    target.hp -= config.weapons.processing_power.individual;
    debug!(unit = %id, hp = target.hp, "individual weapon hit");
    if !target.is_destroyed() {
        return Shot::Hit;
    }

    let points = config.points_for(target.unit_type);
    world.score += points;
    world.individuals_in_transit.remove(&id);
    world.processing_individual_unit = None;
    info!(unit = %id, points, "individual destroyed");
    world.record(GameEvent::DestroyIndividual(id));
    Shot::Destroyed
}

/// Group weapon: one simultaneous sweep over every living member of the locked
/// group. Points are awarded per member destroyed; the group is destroyed when
/// no member survives.
pub fn fire_group(world: &mut WorldState, config: &GameConfig) -> Shot {
    let Some(id) = world.processing_group.clone() else {
        return Shot::Idle;
    };
    let Some(group) = world.groups_in_transit.get_mut(&id) else {
        warn!(group = %id, "locked group missing from transit, releasing lock");
        world.processing_group = None;
        return Shot::Idle;
    };

    let damage = config.weapons.processing_power.group;
    let mut points = 0;
    for unit in group.units.iter_mut().filter(|u| u.hp > 0) {
        unit.hp -= damage;
        if unit.is_destroyed() {
            points += config.points_for(unit.unit_type);
        }
    }
    group.units.retain(|u| !u.is_destroyed());
    let survivors = group.units.len();
    world.score += points;
    debug!(group = %id, survivors, points, "group weapon sweep");

    if survivors > 0 {
        return Shot::Hit;
    }

    world.groups_in_transit.remove(&id);
    world.processing_group = None;
    info!(group = %id, "group destroyed");
    world.record(GameEvent::DestroyGroup(id));
    Shot::Destroyed
}
