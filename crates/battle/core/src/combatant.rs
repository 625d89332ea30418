//! Combatant records and input validation.
//!
//! A [`Combatant`] is a fully-populated value record: the engine owns it
//! exclusively once a battle starts and never looks up stats anywhere else.
//! How the record was obtained (roster file, hand-built in a test) is not
//! this crate's concern.

// ============================================================================
// Side
// ============================================================================

/// Which side of the battlefield a combatant fights on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// The opposing side.
    pub fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

// ============================================================================
// Stats
// ============================================================================

/// Identifies a base stat, used in validation errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatKind {
    Attack,
    Defense,
    Speed,
    MaxHealth,
}

/// Base stats of a combatant. Every stat must be at least 1; this is
/// enforced when a battle is initialized, not at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantStats {
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub max_health: u32,
}

impl CombatantStats {
    /// Returns the first zero-valued stat, if any.
    fn first_zero(&self) -> Option<StatKind> {
        if self.attack == 0 {
            Some(StatKind::Attack)
        } else if self.defense == 0 {
            Some(StatKind::Defense)
        } else if self.speed == 0 {
            Some(StatKind::Speed)
        } else if self.max_health == 0 {
            Some(StatKind::MaxHealth)
        } else {
            None
        }
    }
}

// ============================================================================
// Combatant
// ============================================================================

/// A battle participant with resolved stats and mutable health.
///
/// Invariants maintained by the engine:
/// - `remaining_health <= stats.max_health`
/// - `remaining_health` is non-increasing over the battle's lifetime
/// - once `remaining_health` reaches 0 it never changes again
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    /// Display name, unique within a battle.
    pub name: String,
    pub side: Side,
    pub stats: CombatantStats,
    pub remaining_health: u32,
}

impl Combatant {
    /// Creates a combatant at full health.
    pub fn new(name: impl Into<String>, side: Side, stats: CombatantStats) -> Self {
        Self {
            name: name.into(),
            side,
            stats,
            remaining_health: stats.max_health,
        }
    }

    /// True once this combatant's health has reached zero.
    pub fn is_defeated(&self) -> bool {
        self.remaining_health == 0
    }

    /// Checks the record against the preconditions of battle start.
    pub(crate) fn validate(&self, expected_side: Side) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName {
                side: expected_side,
            });
        }
        if self.side != expected_side {
            return Err(ValidationError::SideMismatch {
                name: self.name.clone(),
                expected: expected_side,
                found: self.side,
            });
        }
        if let Some(stat) = self.stats.first_zero() {
            return Err(ValidationError::NonPositiveStat {
                name: self.name.clone(),
                stat,
            });
        }
        Ok(())
    }
}

/// Malformed combatant input detected at battle initialization.
///
/// Surfaced immediately to the caller; the battle does not start.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationError {
    #[error("{side} combatant has an empty name")]
    EmptyName { side: Side },

    #[error("combatant '{name}' has a non-positive {stat} stat")]
    NonPositiveStat { name: String, stat: StatKind },

    #[error("both combatants are named '{name}'")]
    DuplicateName { name: String },

    #[error("combatant '{name}' is tagged as the {found} side, expected {expected}")]
    SideMismatch {
        name: String,
        expected: Side,
        found: Side,
    },
}
