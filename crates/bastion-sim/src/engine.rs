//! Simulation engine, the single owner of all game state.
//!
//! `SimulationEngine` holds the world, both admission queues and the RNG.
//! The game loop feeds it one `LoopEvent` per iteration; when the event
//! changed the world, the loop calls `flush` to broadcast a snapshot.
//! Completely headless, enabling deterministic testing.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use bastion_core::commands::Command;
use bastion_core::config::GameConfig;
use bastion_core::constants::{GROUP_QUEUE_CAPACITY, INDIVIDUAL_QUEUE_CAPACITY};
use bastion_core::state::GameStateSnapshot;
use bastion_core::types::{GroupId, Tower, UnitId};

use crate::broadcast::Broadcaster;
use crate::systems;
use crate::targeting::AdmissionQueue;
use crate::world::WorldState;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same spawn types and ids.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// One unit of work for the loop. Exactly one is serviced per iteration.
#[derive(Debug, Clone)]
pub enum LoopEvent {
    /// Spawn timer fired.
    Spawn,
    /// An operator command arrived.
    Command(Command),
    /// TTL-check timer fired.
    TtlCheck,
    /// Individual-weapon timer fired.
    IndividualWeapon,
    /// Group-weapon timer fired.
    GroupWeapon,
}

/// The simulation engine. Owns the world and all sim state.
pub struct SimulationEngine {
    config: GameConfig,
    world: WorldState,
    towers: Vec<Tower>,
    rng: ChaCha8Rng,
    individual_queue: AdmissionQueue<UnitId>,
    group_queue: AdmissionQueue<GroupId>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given game parameters.
    pub fn new(config: GameConfig, sim: SimConfig) -> Self {
        Self {
            config,
            world: WorldState::new(),
            towers: world_setup::default_towers(),
            rng: ChaCha8Rng::seed_from_u64(sim.seed),
            individual_queue: AdmissionQueue::with_capacity(INDIVIDUAL_QUEUE_CAPACITY),
            group_queue: AdmissionQueue::with_capacity(GROUP_QUEUE_CAPACITY),
        }
    }

    /// Apply one loop event. Returns true when the world changed and a
    /// snapshot should be broadcast.
    pub fn step(&mut self, event: LoopEvent) -> bool {
        match event {
            LoopEvent::Spawn => {
                self.spawn_units();
                true
            }
            LoopEvent::Command(command) => {
                self.handle_command(command);
                true
            }
            LoopEvent::TtlCheck => {
                self.check_ttls();
                true
            }
            LoopEvent::IndividualWeapon => self.fire_individual_weapon(),
            LoopEvent::GroupWeapon => self.fire_group_weapon(),
        }
    }

    /// Broadcast the current snapshot, then clear the event ledger.
    pub fn flush(&mut self, broadcaster: &dyn Broadcaster) {
        broadcaster.broadcast(&self.snapshot());
        self.world.last_events.clear();
    }

    /// One spawn attempt per tower.
    pub fn spawn_units(&mut self) -> Vec<UnitId> {
        systems::spawner::run(&mut self.world, &mut self.rng, &self.towers, &self.config)
    }

    /// Apply one operator command.
    pub fn handle_command(&mut self, command: Command) {
        systems::command_processor::run(
            &mut self.world,
            &mut self.rng,
            &self.config,
            &mut self.individual_queue,
            &mut self.group_queue,
            command,
        );
    }

    /// Decay every clock, expire what ran out, then offer free weapons their
    /// next queued target.
    pub fn check_ttls(&mut self) -> systems::decay::DecayReport {
        let report = systems::decay::run(&mut self.world, &self.config);
        self.admit_targets();
        report
    }

    /// Try to fill both weapon locks from their queues. Returns true when
    /// either weapon took a new lock.
    pub fn admit_targets(&mut self) -> bool {
        let individual =
            systems::admission::admit_individual(&mut self.world, &mut self.individual_queue);
        let group = systems::admission::admit_group(&mut self.world, &mut self.group_queue);
        individual || group
    }

    /// Returns true when a target was locked and took damage.
    pub fn fire_individual_weapon(&mut self) -> bool {
        systems::weapons::fire_individual(&mut self.world, &self.config).changed_state()
    }

    /// Returns true when a group was locked and took damage.
    pub fn fire_group_weapon(&mut self) -> bool {
        systems::weapons::fire_group(&mut self.world, &self.config).changed_state()
    }

    /// Build the broadcast view of the current world.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(&self.world)
    }

    /// Get a read-only reference to the world.
    pub fn world(&self) -> &WorldState {
        &self.world
    }

    /// Get the game parameters this engine runs with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn towers(&self) -> &[Tower] {
        &self.towers
    }

    /// Entries waiting for the individual weapon, including stale ones.
    pub fn individual_queue_len(&self) -> usize {
        self.individual_queue.len()
    }

    /// Entries waiting for the group weapon, including stale ones.
    pub fn group_queue_len(&self) -> usize {
        self.group_queue.len()
    }

    /// Log the parameters the loop is about to run with.
    pub fn log_startup(&self) {
        info!(
            towers = self.towers.len(),
            spawn_ms = self.config.rates.spawn_rate_ms,
            ttl_check_ms = self.config.rates.ttl_check_rate_ms,
            individual_weapon_ms = self.config.rates.individual_weapon_rate_ms,
            group_weapon_ms = self.config.rates.group_weapon_rate_ms,
            "engine armed"
        );
    }

    /// Mutable world access for tests that need hand-placed units.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut WorldState {
        &mut self.world
    }

    /// Place an idle unit of a given type (for tests needing a known roster).
    #[cfg(test)]
    pub fn spawn_test_unit(&mut self, unit_type: bastion_core::enums::UnitType) -> UnitId {
        world_setup::spawn_unit(&mut self.world, &mut self.rng, &self.config, unit_type)
    }
}
