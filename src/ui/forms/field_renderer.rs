//! Field rendering utilities for forms

use crate::state::FieldSpec;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field needs in the step layout
pub fn field_height(field: &FieldSpec) -> u16 {
    if field.is_multiline() {
        6
    } else {
        3
    }
}

/// Draw one wizard field with its current value
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldSpec, value: &str, is_active: bool) {
    let accent = if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let cursor_style = Style::default().fg(Color::Cyan);

    let content = if field.is_choice() {
        let style = if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        Paragraph::new(Line::from(Span::styled(field.display_value(value), style)))
    } else {
        let display_value = if value.is_empty() && !is_active {
            "(empty)"
        } else {
            value
        };
        let cursor = if is_active { "▌" } else { "" };

        if field.is_multiline() {
            let mut lines: Vec<Line> = display_value
                .split('\n')
                .map(|l| Line::from(l.to_string()))
                .collect();
            if let Some(last) = lines.last_mut() {
                last.spans.push(Span::styled(cursor, cursor_style));
            }
            Paragraph::new(lines)
        } else {
            let style = if value.is_empty() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            Paragraph::new(Line::from(vec![
                Span::styled(display_value, style),
                Span::styled(cursor, cursor_style),
            ]))
        }
    };

    let block = Block::default()
        .title(format!(" {} ", field.display_label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiline_fields_are_taller() {
        assert_eq!(field_height(&FieldSpec::text("email", "Email")), 3);
        assert_eq!(field_height(&FieldSpec::multiline("description", "Description")), 6);
    }
}
