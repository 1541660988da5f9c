//! Event tags recorded during one loop iteration.
//!
//! Tags are a diagnostic ledger for the UI. The engine never branches on them.

use std::fmt;

use crate::types::{GroupId, UnitId};

/// Something that changed in the current iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// An idle unit outlived its battlefield TTL.
    Escape(UnitId),
    /// A deployed unit reached the base unengaged.
    BreachIndividual(UnitId),
    /// A deployed group reached the base unengaged.
    BreachGroup(GroupId),
    LockOnIndividual(UnitId),
    LockOnGroup(GroupId),
    DestroyIndividual(UnitId),
    DestroyGroup(GroupId),
}

impl GameEvent {
    /// Tag prefix as it appears on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::Escape(_) => "ESCAPE",
            GameEvent::BreachIndividual(_) => "BREACH_INDIVIDUAL",
            GameEvent::BreachGroup(_) => "BREACH_GROUP",
            GameEvent::LockOnIndividual(_) => "LOCK_ON_INDIVIDUAL",
            GameEvent::LockOnGroup(_) => "LOCK_ON_GROUP",
            GameEvent::DestroyIndividual(_) => "DESTROY_INDIVIDUAL",
            GameEvent::DestroyGroup(_) => "DESTROY_GROUP",
        }
    }

    fn subject(&self) -> &str {
        match self {
            GameEvent::Escape(id)
            | GameEvent::BreachIndividual(id)
            | GameEvent::LockOnIndividual(id)
            | GameEvent::DestroyIndividual(id) => id.as_str(),
            GameEvent::BreachGroup(id) | GameEvent::LockOnGroup(id) | GameEvent::DestroyGroup(id) => {
                id.as_str()
            }
        }
    }
}

/// Formats as `KIND:<id>`, e.g. `ESCAPE:3f2a...`.
impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.subject())
    }
}
