//! Runtime orchestration for creature battles.
//!
//! This crate wires the pure battle engine into an async session: a worker
//! task exclusively owns the authoritative [`battle_core::BattleState`], a
//! scheduler drives turns on a fixed cadence, and an event bus streams turn
//! results to whatever presentation layer is listening. Consumers embed
//! [`Runtime`] to run battles and interact through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator, builder, and turn scheduler
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus for flexible routing
//! - [`select`] picks random opponents from a roster
//! - `workers` keeps the background battle task internal to the crate
pub mod api;
pub mod events;
pub mod runtime;
pub mod select;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{BattleEvent, Event, EventBus, Topic, TurnEvent};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use select::choose_opponent;
