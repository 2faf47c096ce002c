//! Error types for wizard operations

use thiserror::Error;

/// Reasons a wizard refuses an operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// One or more required fields on the current step are blank
    #[error("Step {step} is missing required fields: {}", .fields.join(", "))]
    MissingRequiredField { step: usize, fields: Vec<String> },

    /// Submit was called before reaching the last step
    #[error("Submit is only available on step {last} (currently on step {step})")]
    NotOnFinalStep { step: usize, last: usize },

    /// A submission is already waiting on the sink
    #[error("A submission is already in progress")]
    SubmissionInProgress,

    /// The wizard already completed; call reset before submitting again
    #[error("This form has already been submitted")]
    AlreadySubmitted,

    /// The sink reported a failure; the draft is kept for a retry
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    /// The named field is not declared by this wizard
    #[error("Unknown field: {0}")]
    UnknownField(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_lists_fields() {
        let err = WizardError::MissingRequiredField {
            step: 2,
            fields: vec!["service".to_string(), "budget".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Step 2 is missing required fields: service, budget"
        );
    }

    #[test]
    fn test_not_on_final_step_message() {
        let err = WizardError::NotOnFinalStep { step: 1, last: 3 };
        assert!(err.to_string().contains("step 3"));
        assert!(err.to_string().contains("step 1"));
    }

    #[test]
    fn test_submission_failed_carries_reason() {
        let err = WizardError::SubmissionFailed("network unreachable".to_string());
        assert_eq!(err.to_string(), "Submission failed: network unreachable");
    }
}
