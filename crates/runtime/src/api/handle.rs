//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! advancing turns or streaming events from specific topics.

use tokio::sync::{broadcast, mpsc, oneshot};

use battle_core::{BattleState, Combatant, TurnOutcome};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with a battle session.
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Resolve the next turn.
    ///
    /// Once the battle has concluded this returns the
    /// [`TurnOutcome::AlreadyOver`] sentinel without touching state, so a
    /// scheduler may keep polling safely.
    pub async fn advance_turn(&self) -> Result<TurnOutcome> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::AdvanceTurn { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Query the current battle state (read-only snapshot).
    pub async fn query_state(&self) -> Result<BattleState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Start a fresh battle, replacing the previous one wholesale.
    ///
    /// Pass `seed` for a reproducible battle, or `None` to draw one from the
    /// host RNG. Fails with [`RuntimeError::Validation`] on malformed
    /// combatants; the previous battle is left untouched in that case.
    pub async fn start_battle(
        &self,
        player: Combatant,
        opponent: Combatant,
        seed: Option<u64>,
    ) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::StartBattle {
                player,
                opponent,
                seed,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Subscribe to events from a specific topic.
    ///
    /// # Topics
    ///
    /// - [`Topic::Battle`] - lifecycle (started, concluded)
    /// - [`Topic::Turn`] - per-turn results
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Get a reference to the event bus for advanced usage.
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
