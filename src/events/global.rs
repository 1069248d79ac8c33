//! Global access to the application event bus.
//!
//! The bus must be initialized once at startup via `init_event_bus()`;
//! afterwards any module can publish via `publish()` or `publisher()`,
//! and the main run loop drains via `drain_events()`.
//!
//! The `Sender` is `Send + Sync` and lives in a `OnceLock`; the
//! `Receiver` sits behind a `Mutex` but is only ever touched from the
//! main thread, so contention is effectively zero.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, OnceLock};

use super::bus::EventPublisher;
use super::types::AppEvent;

static SENDER: OnceLock<Sender<AppEvent>> = OnceLock::new();
static RECEIVER: OnceLock<Mutex<Receiver<AppEvent>>> = OnceLock::new();

/// Initialize the global event bus. Must be called exactly once at
/// startup, before any events are published.
///
/// # Panics
/// Panics if the bus has already been initialized.
pub fn init_event_bus() {
    let (sender, receiver) = mpsc::channel();

    SENDER
        .set(sender)
        .expect("event bus already initialized (sender)");
    RECEIVER
        .set(Mutex::new(receiver))
        .expect("event bus already initialized (receiver)");
}

/// Get a publisher handle for the global bus.
///
/// # Panics
/// Panics if `init_event_bus()` has not been called.
pub fn publisher() -> EventPublisher {
    let sender = SENDER
        .get()
        .expect("event bus not initialized - call init_event_bus() first");
    EventPublisher::from_sender(sender.clone())
}

/// Publish a one-off event to the global bus.
///
/// # Panics
/// Panics if `init_event_bus()` has not been called.
pub fn publish(event: AppEvent) {
    let sender = SENDER
        .get()
        .expect("event bus not initialized - call init_event_bus() first");
    // Ignore send errors - receiver dropped means app is shutting down
    let _ = sender.send(event);
}

/// Drain all pending events from the global bus.
///
/// # Panics
/// Panics if `init_event_bus()` has not been called.
pub fn drain_events() -> Vec<AppEvent> {
    let receiver = RECEIVER
        .get()
        .expect("event bus not initialized - call init_event_bus() first");
    let receiver = receiver.lock().expect("event bus receiver mutex poisoned");

    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }
    events
}
