//! Application state definitions

use super::forms::{FieldSpec, Identity, Wizard, WizardKind};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Loading screen with progress and scrambled tagline
    Splash,
    #[default]
    Home,
    Wizard,
}

/// Buttons on the wizard's action row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardButton {
    Back,
    /// "Next" on intermediate steps, "Submit" on the last one
    #[default]
    Forward,
}

impl WizardButton {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Back => Self::Forward,
            Self::Forward => Self::Back,
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub home_index: usize,

    // Identity snapshot handed to every new wizard
    pub identity: Option<Identity>,

    // Active wizard, present only in the Wizard view
    pub wizard: Option<Wizard>,
    /// Focus within the step: visible field index, or the action row after the last field
    pub active_form_field: usize,
    pub form_selected_button: WizardButton,

    // Errors waiting to be shown, oldest first
    pub errors: VecDeque<String>,
}

impl AppState {
    pub fn new(identity: Option<Identity>) -> Self {
        Self {
            identity,
            ..Default::default()
        }
    }

    /// Move home menu selection down
    pub fn move_selection_down(&mut self) {
        if self.home_index + 1 < WizardKind::ALL.len() {
            self.home_index += 1;
        }
    }

    /// Move home menu selection up
    pub fn move_selection_up(&mut self) {
        self.home_index = self.home_index.saturating_sub(1);
    }

    pub fn selected_kind(&self) -> WizardKind {
        WizardKind::ALL[self.home_index.min(WizardKind::ALL.len() - 1)]
    }

    /// Start a fresh wizard, prefilled from the identity snapshot
    pub fn open_wizard(&mut self, kind: WizardKind) {
        self.wizard = Some(Wizard::for_kind(kind, self.identity.as_ref()));
        self.current_view = View::Wizard;
        self.reset_focus();
    }

    /// Drop the wizard and its draft, returning home
    pub fn close_wizard(&mut self) {
        self.wizard = None;
        self.current_view = View::Home;
        self.reset_focus();
    }

    pub fn reset_focus(&mut self) {
        self.active_form_field = 0;
        self.form_selected_button = WizardButton::Forward;
    }

    /// Number of focus stops on the current step (fields plus the action row)
    pub fn form_field_count(&self) -> usize {
        self.wizard
            .as_ref()
            .map(|w| w.visible_fields().len() + 1)
            .unwrap_or(1)
    }

    /// Returns true if the action row is focused
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_form_field + 1 >= self.form_field_count()
    }

    /// Field under focus, `None` when the action row is focused
    pub fn focused_field(&self) -> Option<&FieldSpec> {
        self.wizard
            .as_ref()
            .and_then(|w| w.visible_fields().get(self.active_form_field).copied())
    }

    /// Move to next form field
    pub fn next_form_field(&mut self) {
        self.active_form_field = (self.active_form_field + 1) % self.form_field_count();
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self) {
        if self.active_form_field == 0 {
            self.active_form_field = self.form_field_count() - 1;
        } else {
            self.active_form_field -= 1;
        }
    }

    /// Keep focus in range after the visible field set changed
    pub fn clamp_focus(&mut self) {
        let last = self.form_field_count() - 1;
        self.active_form_field = self.active_form_field.min(last);
    }

    /// Handle character input in the focused text field
    pub fn form_input_char(&mut self, c: char) {
        let Some(name) = self.focused_text_field() else {
            return;
        };
        if let Some(wizard) = self.wizard.as_mut() {
            let mut value = wizard.value(name).to_string();
            value.push(c);
            wizard.update_field(name, value);
        }
    }

    /// Handle backspace in the focused text field
    pub fn form_backspace(&mut self) {
        let Some(name) = self.focused_text_field() else {
            return;
        };
        if let Some(wizard) = self.wizard.as_mut() {
            let mut value = wizard.value(name).to_string();
            value.pop();
            wizard.update_field(name, value);
        }
    }

    /// Cycle the focused choice field. Changing a choice may show or hide
    /// dependent fields, so focus is clamped afterwards.
    pub fn form_cycle_choice(&mut self, forward: bool) {
        let Some(name) = self
            .focused_field()
            .filter(|f| f.is_choice())
            .map(|f| f.name)
        else {
            return;
        };
        if let Some(wizard) = self.wizard.as_mut() {
            if let Err(err) = wizard.cycle_choice(name, forward) {
                tracing::warn!("Failed to cycle choice: {err}");
            }
        }
        self.clamp_focus();
    }

    fn focused_text_field(&self) -> Option<&'static str> {
        self.focused_field()
            .filter(|f| !f.is_choice())
            .map(|f| f.name)
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently displayed
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    /// Dismiss the displayed error
    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(kind: WizardKind) -> AppState {
        let mut state = AppState::default();
        state.open_wizard(kind);
        state
    }

    mod home {
        use super::*;

        #[test]
        fn test_default_view_is_home() {
            assert_eq!(AppState::default().current_view, View::Home);
        }

        #[test]
        fn test_selection_clamped_to_menu() {
            let mut state = AppState::default();
            state.move_selection_up();
            assert_eq!(state.home_index, 0);
            for _ in 0..10 {
                state.move_selection_down();
            }
            assert_eq!(state.home_index, WizardKind::ALL.len() - 1);
            assert_eq!(state.selected_kind(), WizardKind::Contact);
        }
    }

    mod wizard_lifecycle {
        use super::*;

        #[test]
        fn test_open_wizard_switches_view() {
            let state = state_with(WizardKind::JobApplication);
            assert_eq!(state.current_view, View::Wizard);
            assert_eq!(
                state.wizard.as_ref().map(|w| w.kind()),
                Some(WizardKind::JobApplication)
            );
            assert_eq!(state.active_form_field, 0);
        }

        #[test]
        fn test_open_wizard_uses_identity() {
            let mut state = AppState::new(Some(Identity {
                name: "Jane Doe".to_string(),
                email: "jane@x.com".to_string(),
                mobile: "9999999999".to_string(),
            }));
            state.open_wizard(WizardKind::ServiceRequest);
            assert_eq!(state.wizard.as_ref().unwrap().value("email"), "jane@x.com");
        }

        #[test]
        fn test_close_wizard_discards_draft() {
            let mut state = state_with(WizardKind::ServiceRequest);
            state.form_input_char('J');
            state.close_wizard();
            assert!(state.wizard.is_none());
            assert_eq!(state.current_view, View::Home);

            state.open_wizard(WizardKind::ServiceRequest);
            assert!(state.wizard.as_ref().unwrap().draft().is_empty());
        }
    }

    mod focus {
        use super::*;

        #[test]
        fn test_field_count_includes_action_row() {
            // fullName, company, email, mobile, location + action row
            let state = state_with(WizardKind::ServiceRequest);
            assert_eq!(state.form_field_count(), 6);
        }

        #[test]
        fn test_next_field_wraps() {
            let mut state = state_with(WizardKind::ServiceRequest);
            for _ in 0..6 {
                state.next_form_field();
            }
            assert_eq!(state.active_form_field, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_action_row() {
            let mut state = state_with(WizardKind::ServiceRequest);
            state.prev_form_field();
            assert!(state.is_buttons_row_active());
            assert!(state.focused_field().is_none());
        }

        #[test]
        fn test_contact_purpose_changes_focus_ring() {
            let mut state = state_with(WizardKind::Contact);
            // purpose, name, mobile, email, subject, message + action row
            assert_eq!(state.form_field_count(), 7);

            state.form_cycle_choice(false);

            assert_eq!(state.form_field_count(), 6);
            state.active_form_field = 4;
            assert_eq!(state.focused_field().map(|f| f.name), Some("message"));
        }

        #[test]
        fn test_button_toggle() {
            assert_eq!(WizardButton::Back.toggle(), WizardButton::Forward);
            assert_eq!(WizardButton::Forward.toggle(), WizardButton::Back);
        }
    }

    mod input {
        use super::*;

        #[test]
        fn test_typing_updates_focused_field() {
            let mut state = state_with(WizardKind::ServiceRequest);
            for c in "Jane".chars() {
                state.form_input_char(c);
            }
            state.form_backspace();
            assert_eq!(state.wizard.as_ref().unwrap().value("fullName"), "Jan");
        }

        #[test]
        fn test_typing_on_action_row_is_ignored() {
            let mut state = state_with(WizardKind::ServiceRequest);
            state.prev_form_field();
            state.form_input_char('x');
            assert!(state.wizard.as_ref().unwrap().draft().is_empty());
        }

        #[test]
        fn test_typing_on_choice_field_is_ignored() {
            let mut state = state_with(WizardKind::ServiceRequest);
            let wizard = state.wizard.as_mut().unwrap();
            wizard.update_field("fullName", "Jane");
            wizard.update_field("email", "jane@x.com");
            wizard.update_field("mobile", "1");
            wizard.advance().unwrap();

            state.form_input_char('x');
            assert_eq!(state.wizard.as_ref().unwrap().value("service"), "");

            state.form_cycle_choice(true);
            assert_eq!(state.wizard.as_ref().unwrap().value("service"), "Logo Design");
        }

        #[test]
        fn test_hiding_field_clamps_focus() {
            let mut state = state_with(WizardKind::JobApplication);
            let wizard = state.wizard.as_mut().unwrap();
            wizard.update_field("fullName", "Jane");
            wizard.update_field("email", "jane@x.com");
            wizard.update_field("mobile", "1");
            wizard.advance().unwrap();
            wizard.update_field("experienceLevel", "Experienced");
            // role, experienceLevel, yearsOfExperience + action row
            assert_eq!(state.form_field_count(), 4);
            state.active_form_field = 3;

            state
                .wizard
                .as_mut()
                .unwrap()
                .update_field("experienceLevel", "Fresher");
            state.clamp_focus();

            assert_eq!(state.form_field_count(), 3);
            assert_eq!(state.active_form_field, 2);
            assert!(state.is_buttons_row_active());
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn test_errors_queue_in_order() {
            let mut state = AppState::default();
            state.push_error("first".to_string());
            state.push_error("second".to_string());
            assert!(state.has_errors());
            assert_eq!(state.current_error(), Some("first"));
            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));
            state.dismiss_error();
            assert!(!state.has_errors());
        }
    }
}
