//! Game state snapshot: the complete world state sent to listeners after every change.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Group, GroupId, Squad, SquadId, Unit, UnitId};

/// Complete world state broadcast after each state-changing iteration.
///
/// The weapon locks are resolved to full objects so a listener never has to
/// cross-reference the transit maps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateSnapshot {
    pub available_units: BTreeMap<UnitId, Unit>,
    pub individuals_in_transit: BTreeMap<UnitId, Unit>,
    pub groups_in_transit: BTreeMap<GroupId, Group>,
    pub score: i64,
    pub breach_count: u32,
    pub escaped_count: u32,
    /// Event tags accumulated since the previous broadcast.
    pub last_events: Vec<String>,
    pub squads: BTreeMap<SquadId, Squad>,
    pub processing_individual_unit: Option<Unit>,
    pub processing_group: Option<Group>,
}
