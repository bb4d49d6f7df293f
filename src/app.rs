//! The dispatcher: walks the config sections and runs each enabled backend.
//!
//! Sections are processed sequentially, one blocking `run()` at a time. A
//! failing section is logged and counted but never stops the sections
//! after it; the exit-code mapping from the summary happens in `main`.

use crate::config::Config;
use crate::notification;
use tracing::{debug, error, info};

/// What happened across one dispatch pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    /// Sections whose backend delivered successfully.
    pub dispatched: usize,
    /// Sections with no registered backend.
    pub skipped: usize,
    /// Sections whose backend failed to construct or deliver.
    pub failed: usize,
}

impl DispatchSummary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Runs every enabled backend once, in config file order.
pub fn dispatch(config: &Config, args: &[String]) -> DispatchSummary {
    let mut summary = DispatchSummary::default();

    for (name, section) in config.sections() {
        match notification::create(name, section, args) {
            None => {
                debug!(section = name, "no registered backend, skipping");
                summary.skipped += 1;
            }
            Some(Err(e)) => {
                error!(section = name, "failed to construct backend: {e}");
                summary.failed += 1;
            }
            Some(Ok(notifier)) => match notifier.run() {
                Ok(()) => {
                    info!(section = name, "notification delivered");
                    summary.dispatched += 1;
                }
                Err(e) => {
                    error!(section = name, "delivery failed: {e}");
                    summary.failed += 1;
                }
            },
        }
    }

    summary
}
