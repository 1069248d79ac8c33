//! Thread-safe event bus using mpsc channels.
//!
//! The bus provides a simple publish/subscribe mechanism where:
//! - Any module can publish events via `EventPublisher::publish()`
//! - The main thread polls for events via `EventBus::drain()`
//!
//! This is pure Rust with no external dependencies beyond std.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::AppEvent;

/// Multi-producer, single-consumer event bus. Publishers are cheap to
/// clone; the single consumer (the main run loop) drains in batches.
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle that can be cloned and handed to other
    /// modules.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Try to receive the next event without blocking.
    pub fn try_recv(&self) -> Option<AppEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            // All senders dropped means the app is shutting down.
            Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events into a Vec for batch processing.
    pub fn drain(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe event publisher.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Create a publisher from an existing sender (used by the global
    /// access module).
    pub fn from_sender(sender: Sender<AppEvent>) -> Self {
        Self { sender }
    }

    /// Publish an event to the bus. Send errors are ignored: a dropped
    /// receiver means the app is shutting down.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.sender.send(event);
    }
}
