//! Simulated submission sink
//!
//! Stands in for a real backend: waits a fixed delay and acknowledges the
//! submission without transmitting it anywhere. It can be told to fail so
//! the failure branch of the wizards is reachable.

use super::record::{Submission, SubmissionReceipt};
use super::traits::SubmissionSink;
use anyhow::{bail, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Default delay before the simulated sink answers
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// Environment override for the delay, in milliseconds
const DELAY_ENV: &str = "AGENCY_SUBMIT_DELAY_MS";

/// Sink that acknowledges after a fixed delay
#[derive(Debug, Clone)]
pub struct SimulatedSink {
    delay: Duration,
    fail: bool,
}

impl SimulatedSink {
    pub fn new(delay: Duration, fail: bool) -> Self {
        Self { delay, fail }
    }

    /// Build from configuration, letting the environment override the delay
    pub fn from_settings(delay_ms: Option<u64>, fail: bool) -> Self {
        let env_value = std::env::var(DELAY_ENV).ok();
        Self::new(resolve_delay(env_value.as_deref(), delay_ms), fail)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Pick the delay: a parsable environment value, then the config, then the default
fn resolve_delay(env_value: Option<&str>, config_ms: Option<u64>) -> Duration {
    let from_env = env_value.and_then(|raw| match raw.trim().parse::<u64>() {
        Ok(ms) => Some(ms),
        Err(err) => {
            tracing::warn!("Ignoring {DELAY_ENV}={raw:?}: {err}");
            None
        }
    });
    from_env
        .or(config_ms)
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_DELAY)
}

impl Default for SimulatedSink {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY, false)
    }
}

#[async_trait]
impl SubmissionSink for SimulatedSink {
    async fn submit(&self, submission: Submission) -> Result<SubmissionReceipt> {
        tracing::debug!(
            wizard = ?submission.wizard,
            fields = submission.fields.len(),
            delay_ms = self.delay.as_millis() as u64,
            "Simulating submission delivery"
        );
        tokio::time::sleep(self.delay).await;

        if self.fail {
            bail!("the intake service did not respond");
        }

        Ok(SubmissionReceipt::new())
    }
}
