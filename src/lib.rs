//! Notifier - a small local notification dispatcher.
//!
//! This library reads an INI configuration file, determines which
//! notification backends are enabled, and forwards a message to each via
//! an outbound webhook call or an external executable.

pub mod app;
pub mod cli;
pub mod config;
pub mod message;
pub mod notification;

// Re-export core types for convenience
pub use notification::{Notifier, NotifyError};
