//! Static creature content and loaders.
//!
//! This crate houses the creature catalog consumed when setting up battles:
//! - Creature templates (name, ability, moves, base stats)
//! - The roster collection with lookup, search, and opponent filtering
//! - RON/TOML loaders for data-driven rosters and battle tuning
//!
//! Content is consumed by the runtime when initializing battles and never
//! appears in battle state.

pub mod roster;
pub mod template;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use roster::{Roster, RosterError};
pub use template::CreatureTemplate;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, RosterLoader};
