//! Notification backends and the registry that names them.
//!
//! A backend is constructed from one config section and used exactly once:
//! construct, `run()`, exit. The registry is a fixed table mapping a
//! section name to a constructor; sections whose name is not in the table
//! are skipped by the dispatcher.

pub mod exec;
pub mod ifttt;

use ini::Properties;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("section `{section}` is missing required field `{field}`")]
    MissingField {
        section: &'static str,
        field: &'static str,
    },

    #[error("webhook request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("webhook returned status {status}, expected 200")]
    UnexpectedStatus { status: u16 },

    #[error("failed to launch `{path}`: {source}")]
    Launch {
        path: String,
        source: std::io::Error,
    },

    #[error("`{path}` exited with {status}")]
    CommandFailed { path: String, status: ExitStatus },
}

/// A single-use notification delivery mechanism.
pub trait Notifier: std::fmt::Debug {
    /// The registry name this backend was constructed under.
    fn name(&self) -> &'static str;

    /// Delivers the notification, blocking until done.
    fn run(&self) -> Result<(), NotifyError>;
}

/// Constructs a backend from its config section and the forwarded
/// argument list.
pub type Constructor = fn(&Properties, &[String]) -> Result<Box<dyn Notifier>, NotifyError>;

/// The built-in backends. New backends are added by extending this table.
pub const REGISTRY: &[(&str, Constructor)] = &[
    (ifttt::NAME, ifttt::IftttNotifier::from_section),
    (exec::NAME, exec::CommandNotifier::from_section),
];

/// Looks up `name` in the registry and, if registered, constructs the
/// backend from the section. Returns `None` for unregistered names.
pub fn create(
    name: &str,
    section: &Properties,
    args: &[String],
) -> Option<Result<Box<dyn Notifier>, NotifyError>> {
    REGISTRY
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|(_, constructor)| constructor(section, args))
}

fn required<'a>(
    section: &'a Properties,
    section_name: &'static str,
    field: &'static str,
) -> Result<&'a str, NotifyError> {
    section.get(field).ok_or(NotifyError::MissingField {
        section: section_name,
        field,
    })
}
