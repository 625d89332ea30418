//! Battle state owned exclusively by one battle session.
//!
//! There is deliberately no process-wide "current battle": whoever starts a
//! battle owns the [`BattleState`] value and passes it to the engine. A new
//! battle is whole-state replacement, never an in-place reset.

use crate::combatant::{Combatant, Side, ValidationError};

/// Lifecycle phase of a battle. `Concluded` is absorbing: no transition
/// leaves it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlePhase {
    InProgress,
    Concluded { winner: Side },
}

/// Complete state of one battle between two combatants.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    pub player: Combatant,
    pub opponent: Combatant,
    /// Whose turn is next. Resolved once at battle start, flipped every turn.
    pub active_attacker: Side,
    pub phase: BattlePhase,
    /// Base seed for per-turn damage rolls.
    pub seed: u64,
    /// Number of turns resolved so far; doubles as the RNG nonce.
    pub turn: u64,
}

impl BattleState {
    /// Initializes a battle from two fully-populated combatant records.
    ///
    /// Fails fast on malformed input (non-positive stat, empty or duplicate
    /// name, side mismatch). On success both combatants are at full health,
    /// so the returned state is never already concluded.
    ///
    /// First attacker: the combatant with strictly greater speed. On an
    /// exact speed tie the opponent attacks first.
    pub fn new(
        player: Combatant,
        opponent: Combatant,
        seed: u64,
    ) -> Result<Self, ValidationError> {
        player.validate(Side::Player)?;
        opponent.validate(Side::Opponent)?;
        if player.name == opponent.name {
            return Err(ValidationError::DuplicateName {
                name: player.name.clone(),
            });
        }

        let active_attacker = if player.stats.speed > opponent.stats.speed {
            Side::Player
        } else {
            Side::Opponent
        };

        Ok(Self {
            player,
            opponent,
            active_attacker,
            phase: BattlePhase::InProgress,
            seed,
            turn: 0,
        })
    }

    /// True once either combatant's health has reached zero.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, BattlePhase::Concluded { .. })
    }

    /// The winning side, once the battle has concluded.
    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            BattlePhase::Concluded { winner } => Some(winner),
            BattlePhase::InProgress => None,
        }
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub(crate) fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }
}
