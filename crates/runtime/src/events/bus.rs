//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::Event;

/// Topics for event routing.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Battle lifecycle (started, concluded).
    Battle,
    /// Per-turn results.
    Turn,
}

/// Topic-based event bus.
///
/// Consumers subscribe to specific topics and only receive events they care
/// about. Publishing is best-effort: zero subscribers is normal, and slow
/// subscribers are lagged by the broadcast channel, never waited on.
#[derive(Clone)]
pub struct EventBus {
    battle_tx: broadcast::Sender<Event>,
    turn_tx: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic.
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with the specified capacity per topic.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            battle_tx: broadcast::channel(capacity).0,
            turn_tx: broadcast::channel(capacity).0,
        }
    }

    /// Publish an event to its corresponding topic.
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("no subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic.
    ///
    /// Returns a receiver that only sees events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Battle => &self.battle_tx,
            Topic::Turn => &self.turn_tx,
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
