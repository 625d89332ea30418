//! Event payloads published by the battle worker.

use battle_core::{AttackReport, HealthLevel, Side};
use serde::{Deserialize, Serialize};

use super::bus::Topic;

/// Battle lifecycle events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BattleEvent {
    /// A battle was initialized and is ready to run.
    Started {
        player: String,
        opponent: String,
        first_attacker: Side,
    },
    /// A combatant's health reached zero.
    Concluded { winner: Side, turns: u64 },
}

/// One resolved turn, as consumed by presentation layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnEvent {
    pub turn: u64,
    pub attacker: Side,
    pub defender: Side,
    pub damage: u32,
    pub defender_remaining: u32,
    pub defender_max: u32,
    /// Pre-classified health tier so renderers don't re-derive thresholds.
    pub defender_level: HealthLevel,
    pub is_over: bool,
    pub winner: Option<Side>,
}

impl From<&AttackReport> for TurnEvent {
    fn from(report: &AttackReport) -> Self {
        Self {
            turn: report.turn,
            attacker: report.attacker,
            defender: report.defender,
            damage: report.damage,
            defender_remaining: report.defender_remaining,
            defender_max: report.defender_max,
            defender_level: report.defender_level,
            is_over: report.is_over,
            winner: report.winner,
        }
    }
}

/// Event wrapper that carries the topic and typed payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Battle(BattleEvent),
    Turn(TurnEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Battle(_) => Topic::Battle,
            Event::Turn(_) => Topic::Turn,
        }
    }
}
