//! Application state and core logic

use crate::error::WizardError;
use crate::state::{AppState, PendingSubmission, SplashState, SubmissionPhase, View, WizardButton};
use crate::submission::{SubmissionReceipt, SubmissionSink};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Window for the second Ctrl+C press that quits
const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(1000);

/// Sink answer routed back to the event loop
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub ticket: u64,
    pub result: anyhow::Result<SubmissionReceipt>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where completed wizards are delivered
    sink: Arc<dyn SubmissionSink>,
    outcome_tx: mpsc::UnboundedSender<SubmissionOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
    /// Whether the app should quit
    quit: bool,
    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
    /// Loading screen animation state
    pub splash_state: Option<SplashState>,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App instance
    pub fn new(mut state: AppState, sink: Arc<dyn SubmissionSink>, show_splash: bool) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        let splash_state = if show_splash {
            state.current_view = View::Splash;
            Some(SplashState::new())
        } else {
            state.current_view = View::Home;
            None
        };

        Self {
            state,
            sink,
            outcome_tx,
            outcome_rx,
            quit: false,
            status_message: None,
            splash_state,
            last_ctrl_c: None,
        }
    }

    /// Update splash animation state
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update();
            if splash.is_complete() {
                self.splash_state = None;
                self.state.current_view = View::Home;
                return true;
            }
        }
        false
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the active wizard is waiting on the sink
    pub fn is_submitting(&self) -> bool {
        self.state
            .wizard
            .as_ref()
            .is_some_and(|w| *w.phase() == SubmissionPhase::Submitting)
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Apply any sink answers that arrived since the last frame
    pub fn poll_submissions(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: SubmissionOutcome) {
        let Some(wizard) = self.state.wizard.as_mut() else {
            tracing::debug!(ticket = outcome.ticket, "Submission finished after wizard closed");
            return;
        };
        let result = wizard.complete_submit(outcome.ticket, outcome.result);
        tracing::debug!(
            ticket = outcome.ticket,
            phase = wizard.phase().label(),
            "Applied submission outcome"
        );
        match result {
            Ok(()) => {
                if let Some(receipt) = wizard.receipt() {
                    self.status_message =
                        Some(format!("Submitted! Reference {}", receipt.short_reference()));
                }
            }
            Err(err) => {
                self.status_message = None;
                self.push_error(format!(
                    "{err}\n\nYour answers are kept. Press {} to retry.",
                    crate::platform::SUBMIT_SHORTCUT
                ));
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Double Ctrl+C quits from anywhere
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_ctrl_c();
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_view {
            View::Splash => self.handle_splash_key(key),
            View::Home => self.handle_home_key(key),
            View::Wizard => self.handle_wizard_key(key),
        }

        Ok(())
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        match self.last_ctrl_c {
            Some(prev) if now.duration_since(prev) <= DOUBLE_TAP_WINDOW => self.quit = true,
            _ => {
                self.last_ctrl_c = Some(now);
                self.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
        }
    }

    fn handle_splash_key(&mut self, _key: KeyEvent) {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
        }
    }

    /// Handle keys in Home view
    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.move_selection_down(),
            KeyCode::Char(c @ '1'..='4') => {
                self.state.home_index = (c as usize) - ('1' as usize);
                self.open_selected_wizard();
            }
            KeyCode::Enter => self.open_selected_wizard(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    fn open_selected_wizard(&mut self) {
        let kind = self.state.selected_kind();
        tracing::info!(wizard = ?kind, "Opening wizard");
        self.state.open_wizard(kind);
    }

    /// Handle keys in Wizard view
    fn handle_wizard_key(&mut self, key: KeyEvent) {
        let Some(phase) = self.state.wizard.as_ref().map(|w| w.phase().clone()) else {
            self.state.close_wizard();
            return;
        };

        match phase {
            // Submission is not cancellable; every key waits for the sink
            SubmissionPhase::Submitting => return,
            SubmissionPhase::Success => {
                match key.code {
                    KeyCode::Enter | KeyCode::Char('n') => {
                        if let Some(wizard) = self.state.wizard.as_mut() {
                            wizard.reset();
                        }
                        self.state.reset_focus();
                    }
                    KeyCode::Esc | KeyCode::Char('q') => self.state.close_wizard(),
                    _ => {}
                }
                return;
            }
            SubmissionPhase::Idle | SubmissionPhase::Failed { .. } => {}
        }

        let on_action_row = self.state.is_buttons_row_active();

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_current()
            }
            KeyCode::Char('n') if key.modifiers.contains(crate::platform::SHORTCUT_MODIFIER) => {
                self.advance_step()
            }
            KeyCode::Char('b') if key.modifiers.contains(crate::platform::SHORTCUT_MODIFIER) => {
                self.retreat_step()
            }
            KeyCode::Left | KeyCode::Right if on_action_row => {
                self.state.form_selected_button = self.state.form_selected_button.toggle();
            }
            KeyCode::Left => self.state.form_cycle_choice(false),
            KeyCode::Right => self.state.form_cycle_choice(true),
            KeyCode::Enter if on_action_row => match self.state.form_selected_button {
                WizardButton::Back => self.retreat_step(),
                WizardButton::Forward => self.forward(),
            },
            KeyCode::Enter => {
                // Enter in multiline fields adds newline
                if self.state.focused_field().is_some_and(|f| f.is_multiline()) {
                    self.state.form_input_char('\n');
                } else {
                    self.state.next_form_field();
                }
            }
            KeyCode::Esc => {
                tracing::debug!("Leaving wizard, draft discarded");
                self.state.close_wizard();
            }
            KeyCode::Backspace => self.state.form_backspace(),
            KeyCode::Char(c) => self.state.form_input_char(c),
            _ => {}
        }
    }

    /// Next on intermediate steps, submit on the last one
    fn forward(&mut self) {
        let is_final = self
            .state
            .wizard
            .as_ref()
            .is_some_and(|w| w.is_final_step());
        if is_final {
            self.submit_current();
        } else {
            self.advance_step();
        }
    }

    fn advance_step(&mut self) {
        let Some(wizard) = self.state.wizard.as_mut() else {
            return;
        };
        match wizard.advance() {
            Ok(_) => self.state.reset_focus(),
            Err(err) => self.report_refusal(err),
        }
    }

    fn retreat_step(&mut self) {
        if let Some(wizard) = self.state.wizard.as_mut() {
            wizard.retreat();
        }
        self.state.reset_focus();
    }

    fn submit_current(&mut self) {
        let Some(wizard) = self.state.wizard.as_mut() else {
            return;
        };
        match wizard.begin_submit() {
            Ok(pending) => {
                self.status_message = Some("Submitting…".to_string());
                self.spawn_submission(pending);
            }
            Err(err) => self.report_refusal(err),
        }
    }

    /// Run the sink on a background task so the UI keeps drawing
    fn spawn_submission(&self, pending: PendingSubmission) {
        let sink = Arc::clone(&self.sink);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = sink.submit(pending.submission).await;
            if tx
                .send(SubmissionOutcome {
                    ticket: pending.ticket,
                    result,
                })
                .is_err()
            {
                tracing::debug!("Submission finished after the app shut down");
            }
        });
    }

    /// Refusals from validation go to the status bar; anything else is an error
    fn report_refusal(&mut self, err: WizardError) {
        match err {
            WizardError::MissingRequiredField { .. } | WizardError::NotOnFinalStep { .. } => {
                self.status_message = Some(err.to_string());
            }
            other => self.push_error(other.to_string()),
        }
    }
}
