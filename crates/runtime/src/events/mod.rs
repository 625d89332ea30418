//! Topic-based event bus for battle observers.
//!
//! Presentation layers subscribe to the topics they care about and render
//! asynchronously; the worker never waits on them.

mod bus;
mod types;

pub use bus::{EventBus, Topic};
pub use types::{BattleEvent, Event, TurnEvent};
