//! The external-executable backend, registered as `terminal-notifier`.
//!
//! Invokes a configured program as a subprocess, passing through the
//! wrapper's own argument list untouched. Success is exit status 0.

use super::{required, Notifier, NotifyError};
use ini::Properties;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

pub const NAME: &str = "terminal-notifier";

/// A backend that delegates delivery to an external program.
#[derive(Debug)]
pub struct CommandNotifier {
    path: PathBuf,
    args: Vec<String>,
}

impl CommandNotifier {
    /// Constructs the backend from a `[terminal-notifier]` config section.
    /// Requires `path`.
    pub fn from_section(
        section: &Properties,
        args: &[String],
    ) -> Result<Box<dyn Notifier>, NotifyError> {
        let path = required(section, NAME, "path")?;
        Ok(Box::new(Self::new(path, args.to_vec())))
    }

    pub fn new(path: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            path: path.into(),
            args,
        }
    }
}

impl Notifier for CommandNotifier {
    fn name(&self) -> &'static str {
        NAME
    }

    fn run(&self) -> Result<(), NotifyError> {
        debug!(path = %self.path.display(), "invoking external notifier");
        let status = Command::new(&self.path)
            .args(&self.args)
            .status()
            .map_err(|source| NotifyError::Launch {
                path: self.path.display().to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(NotifyError::CommandFailed {
                path: self.path.display().to_string(),
                status,
            })
        }
    }
}
