//! BASTION server.
//!
//! Wires the simulation engine to its timers and to websocket listeners:
//! the game loop owns the engine, the hub fans snapshots out, and each
//! connection forwards decoded commands into the loop.

pub mod game_loop;
pub mod hub;
pub mod protocol;
pub mod routes;
pub mod session;

pub use bastion_core as core;
