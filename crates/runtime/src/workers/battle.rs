//! Battle worker that owns the authoritative [`battle_core::BattleState`].
//!
//! Receives commands from [`crate::RuntimeHandle`], resolves turns via
//! [`battle_core::BattleEngine`], and publishes events to the bus. Exactly
//! one worker exists per battle session; concurrent sessions each get their
//! own worker and state, with nothing shared between them.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use battle_core::{
    BattleConfig, BattleEngine, BattleState, Combatant, PcgRng, TurnOutcome,
};

use crate::api::Result;
use crate::events::{BattleEvent, Event, EventBus, TurnEvent};

/// Commands that can be sent to the battle worker.
pub(crate) enum Command {
    /// Resolve the next turn (no-op sentinel once concluded).
    AdvanceTurn {
        reply: oneshot::Sender<TurnOutcome>,
    },
    /// Query the current battle state (read-only snapshot).
    QueryState { reply: oneshot::Sender<BattleState> },
    /// Replace the battle wholesale with a fresh one ("play again").
    StartBattle {
        player: Combatant,
        opponent: Combatant,
        seed: Option<u64>,
        reply: oneshot::Sender<Result<()>>,
    },
}

/// Background task that processes battle commands.
pub(crate) struct BattleWorker {
    state: BattleState,
    config: BattleConfig,
    rng: PcgRng,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl BattleWorker {
    pub(crate) fn new(
        state: BattleState,
        config: BattleConfig,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            player = %state.player.name,
            opponent = %state.opponent.name,
            first_attacker = %state.active_attacker,
            "battle worker initialized"
        );

        Self {
            state,
            config,
            rng: PcgRng,
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop. Exits when all handles are dropped.
    pub(crate) async fn run(mut self) {
        self.publish_started();

        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }

        debug!("battle worker shutting down (all handles dropped)");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::AdvanceTurn { reply } => {
                let outcome = self.handle_advance();
                if reply.send(outcome).is_err() {
                    debug!("AdvanceTurn reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
            Command::StartBattle {
                player,
                opponent,
                seed,
                reply,
            } => {
                let result = self.handle_start(player, opponent, seed);
                if reply.send(result).is_err() {
                    debug!("StartBattle reply channel closed (caller dropped)");
                }
            }
        }
    }

    /// Resolves one turn and publishes the matching events.
    fn handle_advance(&mut self) -> TurnOutcome {
        let outcome = BattleEngine::new(&mut self.state, &self.config).advance_turn(&self.rng);

        if let TurnOutcome::Attack(report) = &outcome {
            debug!(
                turn = report.turn,
                attacker = %report.attacker,
                damage = report.damage,
                defender_remaining = report.defender_remaining,
                "turn resolved"
            );
            self.event_bus.publish(Event::Turn(TurnEvent::from(report)));

            if let Some(winner) = report.winner {
                info!(winner = %winner, turns = self.state.turn, "battle concluded");
                self.event_bus.publish(Event::Battle(BattleEvent::Concluded {
                    winner,
                    turns: self.state.turn,
                }));
            }
        }

        outcome
    }

    /// Whole-state replacement: validates the new pair, then discards the
    /// previous battle entirely.
    fn handle_start(
        &mut self,
        player: Combatant,
        opponent: Combatant,
        seed: Option<u64>,
    ) -> Result<()> {
        let seed = seed.unwrap_or_else(rand::random);
        self.state = BattleState::new(player, opponent, seed)?;

        info!(
            player = %self.state.player.name,
            opponent = %self.state.opponent.name,
            "battle replaced"
        );
        self.publish_started();
        Ok(())
    }

    fn publish_started(&self) {
        self.event_bus.publish(Event::Battle(BattleEvent::Started {
            player: self.state.player.name.clone(),
            opponent: self.state.opponent.name.clone(),
            first_attacker: self.state.active_attacker,
        }));
    }
}
