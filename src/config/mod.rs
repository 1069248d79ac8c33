//! Configuration persistence.
//!
//! - [`file`]: the flat `key=value` on-disk format and atomic writes
//! - [`store`]: the live [`Settings`] snapshot and [`ConfigStore`]

pub mod file;
pub mod store;

pub use store::{ConfigError, ConfigStore, Settings};
