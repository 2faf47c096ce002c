//! Step wizard engine
//!
//! A [`Wizard`] walks one draft through the steps of a [`WizardDefinition`].
//! Advancing is gated on the current step's required fields, the step index
//! only ever moves by one and stays within `1..=N`, and the submission
//! lifecycle is tracked by [`SubmissionPhase`].
//!
//! Submitting is split in two halves so the sink can run off the UI loop:
//! [`Wizard::begin_submit`] validates, locks the wizard and hands back a
//! ticketed [`PendingSubmission`]; [`Wizard::complete_submit`] applies the
//! sink's answer. Answers carrying an outdated ticket (the wizard was reset
//! meanwhile) are dropped.

use super::catalog::{StepSpec, WizardDefinition, WizardKind};
use super::draft::{FormDraft, Identity};
use super::field::FieldSpec;
use crate::error::WizardError;
use crate::submission::{Submission, SubmissionReceipt, SubmittedField};
use chrono::Utc;

/// Where the wizard is in its submission lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    /// Waiting on the sink; navigation and resubmission are locked
    Submitting,
    /// Sink acknowledged; only `reset` leaves this phase
    Success,
    /// Sink failed; the draft is intact and submit may be retried
    Failed { reason: String },
}

impl SubmissionPhase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Submitting => "Submitting",
            Self::Success => "Submitted",
            Self::Failed { .. } => "Failed",
        }
    }

    fn is_locked(&self) -> bool {
        matches!(self, Self::Submitting | Self::Success)
    }
}

/// A validated submission handed out by [`Wizard::begin_submit`]
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub ticket: u64,
    pub submission: Submission,
}

/// One running instance of a wizard
#[derive(Debug, Clone)]
pub struct Wizard {
    definition: WizardDefinition,
    /// Draft as it was at construction, restored by `reset`
    initial: FormDraft,
    draft: FormDraft,
    /// 1-based, always within `1..=step_count`
    step: usize,
    phase: SubmissionPhase,
    ticket: u64,
    receipt: Option<SubmissionReceipt>,
}

impl Wizard {
    /// Create a wizard, applying field defaults and identity prefill once.
    ///
    /// # Panics
    ///
    /// Panics if the definition declares no steps.
    pub fn new(definition: WizardDefinition, identity: Option<&Identity>) -> Self {
        assert!(
            !definition.steps.is_empty(),
            "{:?} wizard declares no steps",
            definition.kind
        );
        let initial = FormDraft::initial(definition.fields(), identity);
        Self {
            definition,
            draft: initial.clone(),
            initial,
            step: 1,
            phase: SubmissionPhase::Idle,
            ticket: 0,
            receipt: None,
        }
    }

    pub fn for_kind(kind: WizardKind, identity: Option<&Identity>) -> Self {
        Self::new(kind.definition(), identity)
    }

    pub fn kind(&self) -> WizardKind {
        self.definition.kind
    }

    pub fn definition(&self) -> &WizardDefinition {
        &self.definition
    }

    pub fn current_step(&self) -> usize {
        self.step
    }

    pub fn step_count(&self) -> usize {
        self.definition.step_count()
    }

    pub fn is_final_step(&self) -> bool {
        self.step == self.step_count()
    }

    pub fn current_step_spec(&self) -> &StepSpec {
        &self.definition.steps[self.step - 1]
    }

    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        self.receipt.as_ref()
    }

    pub fn value(&self, name: &str) -> &str {
        self.draft.get(name)
    }

    /// Whether a field's visibility condition currently holds
    pub fn is_visible(&self, field: &FieldSpec) -> bool {
        field
            .visible_when
            .map_or(true, |cond| self.draft.get(cond.field) == cond.equals)
    }

    /// Fields of the current step that should be shown
    pub fn visible_fields(&self) -> Vec<&FieldSpec> {
        self.current_step_spec()
            .fields
            .iter()
            .filter(|f| self.is_visible(f))
            .collect()
    }

    /// Required, visible fields of the current step that are still blank
    pub fn missing_required(&self) -> Vec<&'static str> {
        self.visible_fields()
            .into_iter()
            .filter(|f| f.required && self.draft.is_blank(f.name))
            .map(|f| f.name)
            .collect()
    }

    /// Set a field value. Never validated; clears a failed submission.
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) {
        self.draft.set(name, value);
        self.clear_failure();
    }

    /// Move a choice field to its next or previous option.
    ///
    /// The declaration currently shown on this step wins over others sharing
    /// the name. Returns the new value, or `None` when the field is not a choice.
    pub fn cycle_choice(
        &mut self,
        name: &str,
        forward: bool,
    ) -> Result<Option<&'static str>, WizardError> {
        let field = self
            .visible_fields()
            .into_iter()
            .find(|f| f.name == name)
            .or_else(|| self.definition.field(name))
            .ok_or_else(|| WizardError::UnknownField(name.to_string()))?;
        let next = field.cycle_choice(self.draft.get(name), forward);
        if let Some(value) = next {
            self.update_field(name, value);
        }
        Ok(next)
    }

    pub fn can_advance(&self) -> bool {
        !self.phase.is_locked() && !self.is_final_step() && self.missing_required().is_empty()
    }

    /// Move to the next step once the current step's required fields are filled
    pub fn advance(&mut self) -> Result<usize, WizardError> {
        self.ensure_unlocked()?;
        self.ensure_complete()?;
        self.clear_failure();
        self.step = (self.step + 1).min(self.step_count());
        tracing::debug!(wizard = ?self.kind(), step = self.step, "Advanced wizard");
        Ok(self.step)
    }

    /// Move to the previous step, keeping every entered value.
    ///
    /// Does nothing while a submission is pending or after success.
    pub fn retreat(&mut self) -> usize {
        if self.phase.is_locked() {
            return self.step;
        }
        self.clear_failure();
        self.step = self.step.saturating_sub(1).max(1);
        tracing::debug!(wizard = ?self.kind(), step = self.step, "Retreated wizard");
        self.step
    }

    pub fn can_submit(&self) -> bool {
        !self.phase.is_locked() && self.is_final_step() && self.missing_required().is_empty()
    }

    /// Validate the final step and lock the wizard for delivery
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, WizardError> {
        self.ensure_unlocked()?;
        if !self.is_final_step() {
            return Err(WizardError::NotOnFinalStep {
                step: self.step,
                last: self.step_count(),
            });
        }
        self.ensure_complete()?;

        self.ticket += 1;
        self.phase = SubmissionPhase::Submitting;
        let submission = self.build_submission();
        tracing::info!(
            wizard = ?self.kind(),
            ticket = self.ticket,
            fields = submission.fields.len(),
            "Submission started"
        );

        Ok(PendingSubmission {
            ticket: self.ticket,
            submission,
        })
    }

    /// Apply the sink's answer for `ticket`.
    ///
    /// Outdated tickets and answers arriving outside `Submitting` are ignored.
    pub fn complete_submit(
        &mut self,
        ticket: u64,
        result: anyhow::Result<SubmissionReceipt>,
    ) -> Result<(), WizardError> {
        if ticket != self.ticket || self.phase != SubmissionPhase::Submitting {
            tracing::debug!(
                ticket,
                current = self.ticket,
                "Ignoring stale submission result"
            );
            return Ok(());
        }
        match result {
            Ok(receipt) => {
                self.finish_success(receipt);
                Ok(())
            }
            Err(err) => Err(self.finish_failure(err)),
        }
    }

    /// Back to step 1 with the initial draft; any pending answer becomes stale
    pub fn reset(&mut self) {
        self.step = 1;
        self.phase = SubmissionPhase::Idle;
        self.draft = self.initial.clone();
        self.receipt = None;
        self.ticket += 1;
        tracing::debug!(wizard = ?self.kind(), "Wizard reset");
    }

    fn ensure_unlocked(&self) -> Result<(), WizardError> {
        match self.phase {
            SubmissionPhase::Submitting => Err(WizardError::SubmissionInProgress),
            SubmissionPhase::Success => Err(WizardError::AlreadySubmitted),
            _ => Ok(()),
        }
    }

    fn ensure_complete(&self) -> Result<(), WizardError> {
        let missing = self.missing_required();
        if missing.is_empty() {
            return Ok(());
        }
        Err(WizardError::MissingRequiredField {
            step: self.step,
            fields: missing.into_iter().map(String::from).collect(),
        })
    }

    fn clear_failure(&mut self) {
        if matches!(self.phase, SubmissionPhase::Failed { .. }) {
            self.phase = SubmissionPhase::Idle;
        }
    }

    fn finish_success(&mut self, receipt: SubmissionReceipt) {
        tracing::info!(
            wizard = ?self.kind(),
            reference = %receipt.reference,
            "Submission acknowledged"
        );
        self.phase = SubmissionPhase::Success;
        self.receipt = Some(receipt);
        self.draft = self.initial.clone();
    }

    fn finish_failure(&mut self, err: anyhow::Error) -> WizardError {
        let reason = err.to_string();
        tracing::warn!(wizard = ?self.kind(), %reason, "Submission failed");
        self.phase = SubmissionPhase::Failed {
            reason: reason.clone(),
        };
        WizardError::SubmissionFailed(reason)
    }

    fn build_submission(&self) -> Submission {
        let fields = self
            .definition
            .fields()
            .filter(|f| self.is_visible(f) && !self.draft.is_blank(f.name))
            .map(|f| SubmittedField {
                name: f.name.to_string(),
                label: f.label.to_string(),
                value: self.draft.get(f.name).trim().to_string(),
            })
            .collect();

        Submission {
            wizard: self.kind(),
            fields,
            submitted_at: Utc::now(),
        }
    }
}


/// Helpers for driving a wizard directly against a sink
#[cfg(test)]
impl Wizard {
    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    /// Validate, deliver through `sink` and record the outcome in one call
    pub async fn submit(
        &mut self,
        sink: &dyn crate::submission::SubmissionSink,
    ) -> Result<SubmissionReceipt, WizardError> {
        let pending = self.begin_submit()?;
        match sink.submit(pending.submission).await {
            Ok(receipt) => {
                self.finish_success(receipt.clone());
                Ok(receipt)
            }
            Err(err) => Err(self.finish_failure(err)),
        }
    }
}
