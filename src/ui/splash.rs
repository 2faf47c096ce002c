//! Loading screen rendering: brand, scrambling slogans and a progress bar

use crate::state::{SplashState, BRAND, PROGRESS_LABEL};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

/// Width of the progress bar, capped by the terminal width
const BAR_WIDTH: u16 = 40;

/// Draw the loading screen
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Top padding
            Constraint::Length(1), // Brand
            Constraint::Length(1), // Slogans
            Constraint::Length(1), // Gap
            Constraint::Length(1), // Label and percentage
            Constraint::Length(1), // Progress bar
            Constraint::Min(0),    // Bottom padding
            Constraint::Length(1), // Skip hint
            Constraint::Length(1),
        ])
        .split(area);

    let (bold, viz, byte) = (&BRAND[..4], &BRAND[4..7], &BRAND[7..]);
    let brand_style = Style::default().add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(bold, brand_style.fg(Color::White)),
            Span::styled(viz, brand_style.fg(Color::Cyan)),
            Span::styled(byte, brand_style.fg(Color::White)),
        ]))
        .alignment(Alignment::Center),
        chunks[1],
    );

    let slogan_style = if splash_state.is_scrambling() {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::Gray)
    };
    let separator = Span::styled(" | ", Style::default().fg(Color::DarkGray));
    let mut spans = Vec::new();
    for (idx, slogan) in splash_state
        .slogans(&mut rand::thread_rng())
        .into_iter()
        .enumerate()
    {
        if idx > 0 {
            spans.push(separator.clone());
        }
        spans.push(Span::styled(slogan, slogan_style));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        chunks[2],
    );

    let bar_width = BAR_WIDTH.min(area.width);
    let centered = |row: Rect| Rect {
        x: area.x + (area.width.saturating_sub(bar_width)) / 2,
        width: bar_width,
        ..row
    };

    let percent = splash_state.percent();
    let percent_text = format!("{percent}%");
    let gap = (bar_width as usize).saturating_sub(PROGRESS_LABEL.len() + percent_text.len());
    frame.render_widget(
        Paragraph::new(format!("{PROGRESS_LABEL}{}{percent_text}", " ".repeat(gap)))
            .style(Style::default().fg(Color::DarkGray)),
        centered(chunks[4]),
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .percent(percent)
        .label("");
    frame.render_widget(gauge, centered(chunks[5]));

    frame.render_widget(
        Paragraph::new("Press any key to skip")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        chunks[7],
    );
}
