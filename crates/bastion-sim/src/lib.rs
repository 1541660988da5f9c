//! Simulation engine for BASTION.
//!
//! Owns the world state and both admission queues, applies one loop event
//! at a time, and produces `GameStateSnapshot`s for a `Broadcaster`.
//! Completely headless and synchronous, enabling deterministic testing.

pub mod broadcast;
pub mod engine;
pub mod systems;
pub mod targeting;
pub mod world;
pub mod world_setup;

pub use bastion_core as core;
pub use broadcast::Broadcaster;
pub use engine::{LoopEvent, SimConfig, SimulationEngine};
