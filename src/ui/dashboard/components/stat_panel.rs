//! Stat panel component
//!
//! Renders one summary card: total, 30-day delta and direction indicator.

use super::super::utils::{accent_color, format_delta, format_thousands};
use crate::stats::{ChangeType, StatCard};
use crate::theme::Palette;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Arrow shown next to the delta. Driven by the card's tag, not its numbers.
pub fn direction_indicator(change_type: ChangeType) -> &'static str {
    match change_type {
        ChangeType::Positive => "▲",
        ChangeType::Negative => "▼",
    }
}

/// Text lines of a loaded card.
pub fn stat_panel_lines(card: &StatCard, palette: &Palette) -> Vec<Line<'static>> {
    let change_color = match card.change_type {
        ChangeType::Positive => palette.positive,
        ChangeType::Negative => palette.negative,
    };

    vec![
        Line::from(Span::styled(
            format_thousands(card.value),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!(
                    "{} {}",
                    direction_indicator(card.change_type),
                    format_delta(card.change)
                ),
                Style::default().fg(change_color),
            ),
            Span::styled(
                " nos últimos 30 dias",
                Style::default().fg(palette.text_muted),
            ),
        ]),
    ]
}

pub fn render_stat_panel(f: &mut Frame, area: Rect, card: &StatCard, palette: &Palette) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} {} ", card.icon, card.title),
            Style::default().fg(palette.text_muted),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent_color(card.accent)))
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(stat_panel_lines(card, palette))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Placeholder card shown while loading. Never shows a value.
pub fn render_loading_panel(f: &mut Frame, area: Rect, tick: usize, palette: &Palette) {
    // Pulse between three shades, shifted per tick.
    let shades = ["░", "▒", "▓"];
    let width = usize::from(area.width.saturating_sub(4));
    let pulse: String = (0..width)
        .map(|i| shades[(i + tick) % shades.len()])
        .collect();

    let lines = vec![
        Line::from(Span::styled(
            pulse,
            Style::default().fg(palette.border),
        )),
        Line::from(Span::styled(
            "Carregando...",
            Style::default().fg(palette.text_muted),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
