//! Home menu listing the available wizards

use crate::app::App;
use crate::state::WizardKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Card height: borders + label + tagline
const CARD_HEIGHT: u16 = 4;

/// Draw the wizard menu
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" How can we help? ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(WizardKind::ALL.iter().map(|_| Constraint::Length(CARD_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(2)
        .split(inner);

    for (idx, kind) in WizardKind::ALL.iter().enumerate() {
        let is_selected = app.state.home_index == idx;
        draw_card(frame, chunks[idx + 1], idx + 1, kind, is_selected);
    }
}

fn draw_card(frame: &mut Frame, area: Rect, number: usize, kind: &WizardKind, is_selected: bool) {
    let (border, title) = if is_selected {
        (
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (Style::default().fg(Color::DarkGray), Style::default())
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{number} "), Style::default().fg(Color::DarkGray)),
            Span::styled(kind.label(), title),
        ]),
        Line::from(Span::styled(
            kind.tagline(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(card, area);
}
