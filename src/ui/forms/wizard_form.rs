//! Wizard form rendering

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::platform::{NEXT_STEP_SHORTCUT, PREV_STEP_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{SubmissionPhase, Wizard, WizardButton};
use crate::ui::components::{render_action_button, render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the active wizard
pub fn draw_wizard(frame: &mut Frame, area: Rect, app: &App) {
    let Some(wizard) = app.state.wizard.as_ref() else {
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", wizard.kind().label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if *wizard.phase() == SubmissionPhase::Success {
        draw_success(frame, inner, wizard);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Step indicator
            Constraint::Min(0),                // Fields
            Constraint::Length(1),             // Phase line
            Constraint::Length(BUTTON_HEIGHT), // Action row
        ])
        .margin(1)
        .split(inner);

    draw_step_indicator(frame, chunks[0], wizard);
    draw_fields(frame, chunks[1], app, wizard);
    draw_phase_line(frame, chunks[2], wizard);
    draw_action_row(frame, chunks[3], app, wizard);
}

/// "Step 2 of 3" plus the titles of every step
fn draw_step_indicator(frame: &mut Frame, area: Rect, wizard: &Wizard) {
    let current = wizard.current_step();
    let mut spans = vec![Span::styled(
        format!("Step {} of {}  ", current, wizard.step_count()),
        Style::default().add_modifier(Modifier::BOLD),
    )];

    for (idx, step) in wizard.definition().steps.iter().enumerate() {
        let number = idx + 1;
        let style = if number == current {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if number < current {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let marker = if number < current { "✓" } else { "●" };
        if idx > 0 {
            spans.push(Span::styled(" ── ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(format!("{marker} {}", step.title), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_fields(frame: &mut Frame, area: Rect, app: &App, wizard: &Wizard) {
    let fields = wizard.visible_fields();
    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|f| Constraint::Length(field_height(f)))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, field) in fields.iter().enumerate() {
        let is_active = app.state.active_form_field == idx;
        draw_field(frame, chunks[idx], field, wizard.value(field.name), is_active);
    }
}

/// Pending, failure or missing-field feedback above the buttons
fn draw_phase_line(frame: &mut Frame, area: Rect, wizard: &Wizard) {
    let line = match wizard.phase() {
        SubmissionPhase::Submitting => Line::from(Span::styled(
            "Submitting your details…",
            Style::default().fg(Color::Yellow),
        )),
        SubmissionPhase::Failed { reason } => Line::from(vec![
            Span::styled(
                format!("Last attempt failed: {reason}. "),
                Style::default().fg(Color::Red),
            ),
            Span::styled(
                format!("{SUBMIT_SHORTCUT} to retry"),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        _ => {
            let missing = wizard.missing_required();
            if missing.is_empty() {
                Line::from("")
            } else {
                let labels: Vec<&str> = wizard
                    .visible_fields()
                    .into_iter()
                    .filter(|f| missing.contains(&f.name))
                    .map(|f| f.label)
                    .collect();
                Line::from(Span::styled(
                    format!("Required: {}", labels.join(", ")),
                    Style::default().fg(Color::DarkGray),
                ))
            }
        }
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn draw_action_row(frame: &mut Frame, area: Rect, app: &App, wizard: &Wizard) {
    let row_focused = app.state.is_buttons_row_active();
    let selected = app.state.form_selected_button;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),
            Constraint::Min(0),
            Constraint::Length(16),
        ])
        .split(area);

    let submitting = *wizard.phase() == SubmissionPhase::Submitting;
    let back_enabled = wizard.current_step() > 1 && !submitting;
    render_button(
        frame,
        chunks[0],
        "◂ Back",
        row_focused && selected == WizardButton::Back,
        back_enabled,
    );

    let (label, enabled) = if submitting {
        ("Submitting…", false)
    } else if wizard.is_final_step() {
        ("Submit", wizard.can_submit())
    } else {
        ("Next ▸", wizard.can_advance())
    };
    render_action_button(
        frame,
        chunks[2],
        label,
        row_focused && selected == WizardButton::Forward,
        enabled,
        Some(Color::Green),
    );

    let hints =
        format!("{PREV_STEP_SHORTCUT}:back  {NEXT_STEP_SHORTCUT}:next  {SUBMIT_SHORTCUT}:submit");
    let hint_area = Rect {
        y: chunks[1].y + 1,
        height: 1,
        ..chunks[1]
    };
    frame.render_widget(
        Paragraph::new(hints)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        hint_area,
    );
}

fn draw_success(frame: &mut Frame, area: Rect, wizard: &Wizard) {
    let kind = wizard.kind();
    let reference = wizard
        .receipt()
        .map(|r| r.short_reference())
        .unwrap_or_default();

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("✓ {}", kind.success_title()),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(kind.success_message()),
        Line::from(vec![
            Span::raw("Reference: "),
            Span::styled(reference, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("Enter: {}   Esc: back to home", kind.restart_label()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let height = (lines.len() as u16).min(area.height);
    let panel = Rect {
        y: area.y + area.height.saturating_sub(height) / 2,
        height,
        ..area
    };
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        panel,
    );
}
