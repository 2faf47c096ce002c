//! Submission sink module: where completed wizard drafts are delivered

mod record;
mod simulated;
mod traits;

pub use record::{Submission, SubmissionReceipt, SubmittedField};
pub use simulated::SimulatedSink;
pub use traits::SubmissionSink;

#[cfg(test)]
pub use traits::MockSubmissionSink;
