//! The capability the engine uses to publish state.

use bastion_core::state::GameStateSnapshot;

/// Accepts a complete state snapshot after every changed iteration.
///
/// Called synchronously on the loop. Implementations own any fan-out and must
/// deal with slow listeners themselves; nothing may block or fail back into the loop.
pub trait Broadcaster {
    fn broadcast(&self, snapshot: &GameStateSnapshot);
}
