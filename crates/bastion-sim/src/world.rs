//! Mutable world state owned by the engine.

use std::collections::BTreeMap;

use bastion_core::events::GameEvent;
use bastion_core::types::{Group, GroupId, Squad, SquadId, Unit, UnitId};

/// Everything the simulation knows about the current session.
///
/// Weapon locks are stored as ids into the transit maps, so a locked target
/// is never held in two places.
#[derive(Debug, Clone, Default)]
pub struct WorldState {
    /// Idle units on the battlefield.
    pub available_units: BTreeMap<UnitId, Unit>,
    /// Units deployed one by one.
    pub individuals_in_transit: BTreeMap<UnitId, Unit>,
    pub groups_in_transit: BTreeMap<GroupId, Group>,
    pub squads: BTreeMap<SquadId, Squad>,
    pub score: i64,
    pub breach_count: u32,
    pub escaped_count: u32,
    /// Events recorded since the last broadcast.
    pub last_events: Vec<GameEvent>,
    pub processing_individual_unit: Option<UnitId>,
    pub processing_group: Option<GroupId>,
}

impl WorldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: GameEvent) {
        self.last_events.push(event);
    }

    /// The unit the individual weapon is locked on, if any.
    pub fn locked_unit(&self) -> Option<&Unit> {
        self.processing_individual_unit
            .as_ref()
            .and_then(|id| self.individuals_in_transit.get(id))
    }

    /// The group the group weapon is locked on, if any.
    pub fn locked_group(&self) -> Option<&Group> {
        self.processing_group
            .as_ref()
            .and_then(|id| self.groups_in_transit.get(id))
    }

    pub fn is_locked_unit(&self, id: &UnitId) -> bool {
        self.processing_individual_unit.as_ref() == Some(id)
    }

    pub fn is_locked_group(&self, id: &GroupId) -> bool {
        self.processing_group.as_ref() == Some(id)
    }

    /// Number of live units across every container.
    pub fn unit_count(&self) -> usize {
        self.available_units.len()
            + self.individuals_in_transit.len()
            + self
                .groups_in_transit
                .values()
                .map(|g| g.units.len())
                .sum::<usize>()
    }
}
