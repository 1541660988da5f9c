//! Game loop task: the single control point that drives the engine.
//!
//! Four timers and the command intake are multiplexed with `select!`; each
//! iteration services exactly one of them. The engine is moved into the task,
//! so nothing outside the loop can touch world state.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::{info, warn};

use bastion_core::commands::Command;
use bastion_sim::{Broadcaster, LoopEvent, SimulationEngine};

/// A timer whose first tick is one full period away. Late ticks are skipped
/// rather than replayed in a burst.
fn ticker(period: Duration) -> Interval {
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval
}

/// Run the engine until `shutdown` resolves, broadcasting after every
/// state-changing iteration. Returns the engine for inspection.
///
/// If every command sender is dropped the loop keeps running on its timers.
pub async fn run_game_loop<B>(
    mut engine: SimulationEngine,
    broadcaster: Arc<B>,
    mut commands: mpsc::Receiver<Command>,
    shutdown: impl Future<Output = ()>,
) -> SimulationEngine
where
    B: Broadcaster,
{
    let config = engine.config().clone();
    let mut spawn = ticker(config.spawn_period());
    let mut ttl = ticker(config.ttl_check_period());
    let mut individual = ticker(config.individual_weapon_period());
    let mut group = ticker(config.group_weapon_period());
    let mut intake_open = true;

    tokio::pin!(shutdown);
    engine.log_startup();

    loop {
        let event = tokio::select! {
            _ = &mut shutdown => {
                info!(score = engine.world().score, "game loop stopping");
                return engine;
            }
            _ = spawn.tick() => LoopEvent::Spawn,
            next = commands.recv(), if intake_open => match next {
                Some(command) => LoopEvent::Command(command),
                None => {
                    warn!("command intake closed, continuing on timers");
                    intake_open = false;
                    continue;
                }
            },
            _ = ttl.tick() => LoopEvent::TtlCheck,
            _ = individual.tick() => LoopEvent::IndividualWeapon,
            _ = group.tick() => LoopEvent::GroupWeapon,
        };

        if engine.step(event) {
            engine.flush(broadcaster.as_ref());
        }
    }
}
