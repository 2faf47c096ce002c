//! Form domain layer
//!
//! Declarative wizard definitions and the step engine that runs them.

mod catalog;
mod draft;
mod field;
mod wizard;

pub use catalog::WizardKind;
pub use draft::Identity;
pub use field::FieldSpec;
pub use wizard::{PendingSubmission, SubmissionPhase, Wizard};
