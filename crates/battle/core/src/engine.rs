//! Turn resolution pipeline.
//!
//! [`BattleEngine`] is the authoritative reducer for [`BattleState`]. It
//! resolves one turn per call: draw the damage roll, mutate the defender's
//! health, conclude the battle if the defender falls, flip initiative. The
//! caller decides the cadence; `advance_turn` never sleeps or blocks, so the
//! same code runs under a timer in the runtime and synchronously in tests.

use crate::combat::{HealthLevel, apply_damage, calculate_damage};
use crate::combatant::Side;
use crate::config::BattleConfig;
use crate::rng::{RngOracle, compute_seed};
use crate::state::{BattlePhase, BattleState};

/// Roll context for the per-turn damage draw.
const DAMAGE_ROLL_CONTEXT: u32 = 0;

/// Everything a presentation layer needs to render one resolved turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackReport {
    /// Zero-based index of the resolved turn.
    pub turn: u64,
    pub attacker: Side,
    pub defender: Side,
    pub damage: u32,
    pub defender_remaining: u32,
    pub defender_max: u32,
    pub defender_level: HealthLevel,
    /// True when this turn ended the battle.
    pub is_over: bool,
    pub winner: Option<Side>,
}

/// Outcome of a single [`BattleEngine::advance_turn`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnOutcome {
    /// A turn was resolved and the defender's health updated.
    Attack(AttackReport),
    /// The battle had already concluded; state was left untouched.
    ///
    /// Repeated polling after conclusion is an expected scheduler pattern,
    /// so this is a sentinel, not an error.
    AlreadyOver { winner: Side },
}

/// Battle engine that resolves turns against a borrowed [`BattleState`].
pub struct BattleEngine<'a> {
    state: &'a mut BattleState,
    config: &'a BattleConfig,
}

impl<'a> BattleEngine<'a> {
    /// Creates an engine over the given state.
    pub fn new(state: &'a mut BattleState, config: &'a BattleConfig) -> Self {
        Self { state, config }
    }

    /// Resolves the next turn.
    ///
    /// Attacker and defender are read from `state.active_attacker`; damage is
    /// `round((attack / defense) × r)` for one uniform roll `r` in
    /// `[0, damage_roll_bound)`. Initiative flips every call, including the
    /// game-ending one. On a concluded state this is a no-op.
    pub fn advance_turn(&mut self, rng: &(impl RngOracle + ?Sized)) -> TurnOutcome {
        if let Some(winner) = self.state.winner() {
            return TurnOutcome::AlreadyOver { winner };
        }

        let turn = self.state.turn;
        let attacker_side = self.state.active_attacker;
        let defender_side = attacker_side.other();

        let roll_seed = compute_seed(self.state.seed, turn, DAMAGE_ROLL_CONTEXT);
        let roll = rng.roll_below(roll_seed, self.config.damage_roll_bound);

        let attack = self.state.combatant(attacker_side).stats.attack;
        let defender = self.state.combatant_mut(defender_side);
        let damage = calculate_damage(attack, defender.stats.defense, roll);
        defender.remaining_health = apply_damage(defender.remaining_health, damage);

        let defender_remaining = defender.remaining_health;
        let defender_max = defender.stats.max_health;

        if defender_remaining == 0 {
            self.state.phase = BattlePhase::Concluded {
                winner: attacker_side,
            };
        }

        // Initiative alternates strictly, even on the final turn; once the
        // battle is concluded the flip is unobservable through this API.
        self.state.active_attacker = defender_side;
        self.state.turn = turn + 1;

        let winner = self.state.winner();
        TurnOutcome::Attack(AttackReport {
            turn,
            attacker: attacker_side,
            defender: defender_side,
            damage,
            defender_remaining,
            defender_max,
            defender_level: HealthLevel::from_health(defender_remaining, defender_max),
            is_over: winner.is_some(),
            winner,
        })
    }
}
