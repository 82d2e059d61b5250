//! Recent activity component

use super::super::utils::activity_color;
use crate::stats::ActivityEntry;
use crate::theme::Palette;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Render the activity feed, newest first.
pub fn render_activity_feed(
    f: &mut Frame,
    area: Rect,
    entries: &[ActivityEntry],
    palette: &Palette,
) {
    let mut lines = vec![Line::from(Span::styled(
        "Últimas ações na plataforma",
        Style::default().fg(palette.text_muted),
    ))];

    lines.extend(entries.iter().map(|entry| {
        Line::from(vec![
            Span::styled("● ", Style::default().fg(activity_color(entry.kind))),
            Span::styled(
                entry.action,
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  por {}", entry.actor),
                Style::default().fg(palette.text_muted),
            ),
            Span::styled(
                format!("  [{}]", entry.time),
                Style::default().fg(palette.accent),
            ),
        ])
    }));

    let block = Block::default()
        .title(Span::styled(
            " Atividade Recente ",
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
