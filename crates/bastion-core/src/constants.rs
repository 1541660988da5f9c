//! Simulation constants.

/// Identities of the fixed spawning towers.
pub const TOWER_IDS: [&str; 3] = ["T1", "T2", "T3"];

// --- Admission queues ---

/// Deployed units waiting for the individual weapon.
pub const INDIVIDUAL_QUEUE_CAPACITY: usize = 256;

/// Deployed groups waiting for the group weapon.
pub const GROUP_QUEUE_CAPACITY: usize = 64;

// --- Loop intake ---

/// Pending operator commands buffered ahead of the loop.
pub const COMMAND_CHANNEL_CAPACITY: usize = 128;

// --- Lookup fallbacks ---

/// Points awarded for a type missing from the scoring table.
pub const FALLBACK_POINTS: i64 = 0;

/// Hit points for a type missing from the hit point table.
pub const FALLBACK_HITPOINTS: i32 = 1;
