//! Deterministic battle logic shared across the runtime and offline tools.
//!
//! `battle-core` defines the canonical combat rules (combatants, turn order,
//! damage) and exposes pure APIs that can be reused by both the runtime and
//! tests. All state mutation flows through [`engine::BattleEngine`], and
//! supporting crates depend on the types re-exported here.
//!
//! The crate performs no I/O and owns no clocks: the runtime decides *when*
//! a turn happens, this crate decides *what* the turn does.
pub mod combat;
pub mod combatant;
pub mod config;
pub mod engine;
pub mod rng;
pub mod state;

pub use combat::{HealthLevel, apply_damage, calculate_damage};
pub use combatant::{Combatant, CombatantStats, Side, StatKind, ValidationError};
pub use config::BattleConfig;
pub use engine::{AttackReport, BattleEngine, TurnOutcome};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use state::{BattlePhase, BattleState};
