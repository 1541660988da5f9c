//! Systems that mutate the world in response to one loop event.
//!
//! Systems are plain functions over `&mut WorldState` plus whatever they need
//! from the engine. They do not own state.

pub mod admission;
pub mod command_processor;
pub mod decay;
pub mod snapshot;
pub mod spawner;
pub mod weapons;
