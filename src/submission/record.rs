//! Records exchanged with the submission sink

use crate::state::WizardKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One answered field in a completed submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedField {
    pub name: String,
    pub label: String,
    pub value: String,
}

/// A completed, validated draft ready for delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub wizard: WizardKind,
    /// Visible, non-empty fields in declaration order
    pub fields: Vec<SubmittedField>,
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
impl Submission {
    /// Value of a submitted field, if it was included
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

/// Acknowledgement returned by the sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub reference: Uuid,
    pub received_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new() -> Self {
        Self {
            reference: Uuid::new_v4(),
            received_at: Utc::now(),
        }
    }

    /// Short reference shown to the visitor
    pub fn short_reference(&self) -> String {
        self.reference.simple().to_string()[..8].to_uppercase()
    }
}

impl Default for SubmissionReceipt {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_finds_field() {
        let submission = Submission {
            wizard: WizardKind::ServiceRequest,
            fields: vec![SubmittedField {
                name: "email".to_string(),
                label: "Email".to_string(),
                value: "jane@x.com".to_string(),
            }],
            submitted_at: Utc::now(),
        };
        assert_eq!(submission.value("email"), Some("jane@x.com"));
        assert_eq!(submission.value("mobile"), None);
    }

    #[test]
    fn test_receipts_are_unique() {
        assert_ne!(SubmissionReceipt::new().reference, SubmissionReceipt::new().reference);
    }

    #[test]
    fn test_short_reference_is_eight_uppercase_chars() {
        let short = SubmissionReceipt::new().short_reference();
        assert_eq!(short.len(), 8);
        assert_eq!(short, short.to_uppercase());
    }

    #[test]
    fn test_submission_serializes_wizard_kind() {
        let submission = Submission {
            wizard: WizardKind::Internship,
            fields: vec![],
            submitted_at: Utc::now(),
        };
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["wizard"], "internship");
    }
}
