//! Operator commands accepted by the simulation.
//!
//! Commands are decoded by the transport and applied one at a time inside the loop.

use serde::{Deserialize, Serialize};

use crate::types::{SquadId, UnitId};

/// All possible operator actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "payload", rename_all = "snake_case")]
pub enum Command {
    /// Record a squad template from the types of the given idle units.
    /// The units themselves stay on the battlefield.
    CreateSquad { unit_ids: Vec<UnitId> },
    /// Send idle units into transit one by one.
    DeployIndividuals { unit_ids: Vec<UnitId> },
    /// Pull units matching a squad template off the battlefield as one group.
    DeploySquad { squad_id: SquadId },
}

impl Command {
    /// Wire action name.
    pub fn action(&self) -> &'static str {
        match self {
            Command::CreateSquad { .. } => "create_squad",
            Command::DeployIndividuals { .. } => "deploy_individuals",
            Command::DeploySquad { .. } => "deploy_squad",
        }
    }
}

/// Payload of `create_squad`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSquadPayload {
    pub unit_ids: Vec<UnitId>,
}

/// Payload of `deploy_individuals`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeployIndividualsPayload {
    pub unit_ids: Vec<UnitId>,
}

/// Payload of `deploy_squad`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploySquadPayload {
    pub squad_id: SquadId,
}

impl From<CreateSquadPayload> for Command {
    fn from(payload: CreateSquadPayload) -> Self {
        Command::CreateSquad {
            unit_ids: payload.unit_ids,
        }
    }
}

impl From<DeployIndividualsPayload> for Command {
    fn from(payload: DeployIndividualsPayload) -> Self {
        Command::DeployIndividuals {
            unit_ids: payload.unit_ids,
        }
    }
}

impl From<DeploySquadPayload> for Command {
    fn from(payload: DeploySquadPayload) -> Self {
        Command::DeploySquad {
            squad_id: payload.squad_id,
        }
    }
}
