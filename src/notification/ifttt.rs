//! The IFTTT Maker webhook backend.
//!
//! Delivers the message with a single blocking HTTP POST to the Maker
//! trigger URL, as URL-encoded form field `value1`. The request carries a
//! bounded timeout; the legacy behavior had none.

use super::{required, Notifier, NotifyError};
use crate::message;
use ini::Properties;
use std::time::Duration;
use tracing::debug;

pub const NAME: &str = "ifttt";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A webhook backend targeting the IFTTT Maker service.
#[derive(Debug)]
pub struct IftttNotifier {
    url: String,
    message: String,
    timeout: Duration,
}

impl IftttNotifier {
    /// Constructs the backend from an `[ifttt]` config section. Requires
    /// `key` and `event`; `prefix` is optional.
    pub fn from_section(
        section: &Properties,
        args: &[String],
    ) -> Result<Box<dyn Notifier>, NotifyError> {
        let key = required(section, NAME, "key")?;
        let event = required(section, NAME, "event")?;
        Ok(Box::new(Self::new(key, event, section.get("prefix"), args)))
    }

    pub fn new(key: &str, event: &str, prefix: Option<&str>, args: &[String]) -> Self {
        let parsed = message::parse_message(args);
        let message = match prefix {
            Some(prefix) => format!("[{}] {}", prefix, parsed),
            None => parsed,
        };
        Self {
            url: trigger_url(key, event),
            message,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// The target URL this backend will POST to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The message as it will be delivered, prefix included.
    pub fn message(&self) -> &str {
        &self.message
    }
}

fn trigger_url(key: &str, event: &str) -> String {
    format!("https://maker.ifttt.com/trigger/{event}/with/key/{key}")
}

impl Notifier for IftttNotifier {
    fn name(&self) -> &'static str {
        NAME
    }

    fn run(&self) -> Result<(), NotifyError> {
        debug!(url = %self.url, "posting webhook");
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;
        let response = client
            .post(&self.url)
            .form(&[("value1", self.message.as_str())])
            .send()?;

        // Success is status 200 exactly, matching the service contract.
        if response.status().as_u16() == 200 {
            Ok(())
        } else {
            Err(NotifyError::UnexpectedStatus {
                status: response.status().as_u16(),
            })
        }
    }
}
