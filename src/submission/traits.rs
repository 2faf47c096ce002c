//! Trait abstraction for the submission sink to enable mocking in tests

use super::record::{Submission, SubmissionReceipt};
use anyhow::Result;
use async_trait::async_trait;

/// Destination that ultimately receives completed submissions
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Deliver a submission, resolving once the sink acknowledges or fails
    async fn submit(&self, submission: Submission) -> Result<SubmissionReceipt>;
}
