//! Event system for decoupled inter-module communication.
//!
//! A simple publish/subscribe mechanism over std `mpsc` channels. The
//! Carbon hotkey callback, the status-bar menu target, and the config
//! store all publish typed [`AppEvent`]s; the main-loop timer drains
//! them and hands them to the dispatcher.
//!
//! - [`types`]: event definitions (`AppEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher`
//! - [`global`]: static access functions

pub mod bus;
pub mod global;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use global::{drain_events, init_event_bus, publish, publisher};
pub use types::AppEvent;
