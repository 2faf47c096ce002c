//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;
mod splash;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if let (View::Splash, Some(splash_state)) = (&app.state.current_view, &app.splash_state) {
        splash::draw(frame, area, splash_state);
        return;
    }

    let (header_area, main_area) = layout::create_layout(area);
    layout::draw_header(frame, header_area, app);

    match &app.state.current_view {
        View::Home | View::Splash => home::draw(frame, main_area, app),
        View::Wizard => forms::draw_wizard(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Errors overlay everything else
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message, app.state.errors.len() - 1);
    }
}
