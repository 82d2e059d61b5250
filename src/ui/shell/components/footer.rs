//! Shell footer component
//!
//! Renders the key hints

use crate::theme::Palette;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub const KEY_HINTS: &str = "[1-0] Menu | [↑↓] Navegar | [B] Sidebar | [T] Tema | [:] Ir para | [⌫] Voltar | [R] Recarregar | [Q] Sair";

pub fn render_footer(f: &mut Frame, area: Rect, palette: &Palette) {
    let footer = Paragraph::new(KEY_HINTS)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(palette.border)),
        );
    f.render_widget(footer, area);
}
