//! Wire decoding of operator commands.
//!
//! Listeners send `{"action": "...", "payload": {...}}`. Anything that does
//! not decode into a `Command` is rejected here and never reaches the engine.

use serde::Deserialize;
use thiserror::Error;

use bastion_core::commands::{
    Command, CreateSquadPayload, DeployIndividualsPayload, DeploySquadPayload,
};

/// Why an inbound message was dropped.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed command envelope: {0}")]
    Envelope(#[source] serde_json::Error),
    #[error("unknown command action `{0}`")]
    UnknownAction(String),
    #[error("malformed `{action}` payload: {source}")]
    Payload {
        action: String,
        source: serde_json::Error,
    },
}

/// The untyped envelope every inbound message arrives in.
#[derive(Debug, Deserialize)]
struct WireCommand {
    action: String,
    #[serde(default)]
    payload: serde_json::Value,
}

/// Decode one inbound message into a typed command.
pub fn decode_command(bytes: &[u8]) -> Result<Command, DecodeError> {
    let wire: WireCommand = serde_json::from_slice(bytes).map_err(DecodeError::Envelope)?;
    match wire.action.as_str() {
        "create_squad" => payload::<CreateSquadPayload>(wire).map(Command::from),
        "deploy_individuals" => payload::<DeployIndividualsPayload>(wire).map(Command::from),
        "deploy_squad" => payload::<DeploySquadPayload>(wire).map(Command::from),
        _ => Err(DecodeError::UnknownAction(wire.action)),
    }
}

fn payload<T: serde::de::DeserializeOwned>(wire: WireCommand) -> Result<T, DecodeError> {
    serde_json::from_value(wire.payload).map_err(|source| DecodeError::Payload {
        action: wire.action,
        source,
    })
}
