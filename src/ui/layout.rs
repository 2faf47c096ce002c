//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{SubmissionPhase, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header and content, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the header with the brand and the signed-in visitor
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " AGENCY ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    match &app.state.identity {
        Some(identity) if !identity.name.trim().is_empty() => {
            spans.push(Span::styled(
                format!("  Signed in as {}", identity.name.trim()),
                Style::default().fg(Color::Gray),
            ));
        }
        _ => spans.push(Span::styled("  Guest", Style::default().fg(Color::DarkGray))),
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::raw(" ")];

    let hints = get_view_hints(app);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right (double Ctrl+C to quit)
    let quit_hint = " ^C^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(app: &App) -> String {
    match app.state.current_view {
        View::Splash => "Press any key to skip".to_string(),
        View::Home => "j/k:nav  Enter/1-4:open  q:quit".to_string(),
        View::Wizard => match app.state.wizard.as_ref().map(|w| (w.phase(), w.kind())) {
            Some((SubmissionPhase::Submitting, _)) => "Submitting, please wait".to_string(),
            Some((SubmissionPhase::Success, kind)) => {
                format!("Enter:{}  Esc:home", kind.restart_label().to_lowercase())
            }
            Some((SubmissionPhase::Failed { .. }, _)) => {
                format!("{SUBMIT_SHORTCUT}:retry  Tab:next  Esc:discard")
            }
            _ => "Tab:next  ←/→:choose  Enter:select  Esc:discard".to_string(),
        },
    }
}
