//! High-level runtime orchestrator.
//!
//! The runtime owns the background battle worker, wires up command/event
//! channels, and exposes a builder-based API for clients to drive battles.
//! It also hosts the turn scheduler: the engine itself never owns wall-clock
//! time, so cadence lives here and nowhere else.

use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::debug;

use battle_core::{BattleConfig, BattleState, Combatant, Side, TurnOutcome};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::{Event, EventBus, Topic};
use crate::workers::BattleWorker;

/// Runtime configuration shared across the orchestrator and worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub battle_config: BattleConfig,
    /// Cadence at which [`Runtime::run_battle`] resolves turns.
    pub attack_interval: Duration,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl RuntimeConfig {
    /// Default pause between attacks, sized for presentation layers that
    /// animate each turn.
    pub const DEFAULT_ATTACK_INTERVAL: Duration = Duration::from_millis(4500);
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            battle_config: BattleConfig::default(),
            attack_interval: Self::DEFAULT_ATTACK_INTERVAL,
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Main runtime that orchestrates one battle session.
///
/// Design: the runtime owns the worker and the cadence; [`RuntimeHandle`]
/// provides a cloneable façade for clients and presentation layers.
pub struct Runtime {
    handle: RuntimeHandle,
    attack_interval: Duration,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder.
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime.
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to events from a specific topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Resolve a single turn immediately, off-cadence.
    pub async fn step(&self) -> Result<TurnOutcome> {
        self.handle.advance_turn().await
    }

    /// Drive turns on the configured cadence until the battle concludes,
    /// then stop ticking and return the winner.
    ///
    /// The interval's first tick completes immediately, so the opening
    /// attack lands as soon as the battle starts. One tick resolves at most
    /// one turn, and each turn's command round-trip finishes before the next
    /// tick is awaited, so ticks never re-enter the engine.
    pub async fn run_battle(&self) -> Result<Side> {
        let mut ticker = tokio::time::interval(self.attack_interval);

        loop {
            ticker.tick().await;
            match self.handle.advance_turn().await? {
                TurnOutcome::Attack(report) => {
                    if let Some(winner) = report.winner {
                        debug!(winner = %winner, "scheduler stopping");
                        return Ok(winner);
                    }
                }
                TurnOutcome::AlreadyOver { winner } => return Ok(winner),
            }
        }
    }

    /// Shutdown the runtime gracefully.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);
        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    combatants: Option<(Combatant, Combatant)>,
    seed: Option<u64>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            combatants: None,
            seed: None,
        }
    }

    pub fn with_config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the two combatants for the initial battle.
    pub fn with_battle(mut self, player: Combatant, opponent: Combatant) -> Self {
        self.combatants = Some((player, opponent));
        self
    }

    /// Pin the battle seed for a reproducible battle. Defaults to a random
    /// seed from the host RNG.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the combatants, spawns the battle worker, and returns the
    /// runtime. Must be called within a tokio runtime.
    pub fn build(self) -> Result<Runtime> {
        let (player, opponent) = self.combatants.ok_or(RuntimeError::BattleNotConfigured)?;
        let seed = self.seed.unwrap_or_else(rand::random);
        let state = BattleState::new(player, opponent, seed)?;

        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);
        let (command_tx, command_rx) = mpsc::channel(self.config.command_buffer_size);

        let worker = BattleWorker::new(
            state,
            self.config.battle_config.clone(),
            command_rx,
            event_bus.clone(),
        );
        let worker_handle = tokio::spawn(worker.run());

        Ok(Runtime {
            handle: RuntimeHandle::new(command_tx, event_bus),
            attack_interval: self.config.attack_interval,
            worker_handle,
        })
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
