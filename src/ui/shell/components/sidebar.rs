//! Sidebar component
//!
//! Brand block, navigation menu with the active entry highlighted, and the
//! administrator profile.

use super::super::renderer::{MENU_TOP_MARGIN, SidebarLayout};
use super::super::state::NavigationShell;
use crate::consts::cli_consts::{ADMIN_EMAIL, ADMIN_INITIALS, ADMIN_NAME, APP_NAME, APP_SUBTITLE};
use crate::menu::{MENU, MenuEntry, MenuId};
use crate::theme::Palette;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Entry that carries the notification badge.
const BADGE_ENTRY: MenuId = MenuId::Complaints;

pub fn render_sidebar(f: &mut Frame, layout: &SidebarLayout, shell: &NavigationShell, palette: &Palette) {
    f.render_widget(
        Block::default()
            .borders(Borders::RIGHT)
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.sidebar_bg)),
        layout.area,
    );

    render_brand(f, layout.brand, palette);
    render_menu(f, layout.menu, shell, palette);
    render_profile(f, layout.profile, palette);
}

fn render_brand(f: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                " S ",
                Style::default()
                    .fg(palette.active_bg)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}", APP_NAME),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("    {}", APP_SUBTITLE),
            Style::default().fg(palette.text_muted),
        )),
    ];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border))
        .padding(Padding::new(1, 1, 1, 0));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// One menu row, padded to `width` so the active highlight spans the row.
pub fn menu_line(entry: &MenuEntry, active: bool, badge: Option<u32>, width: usize, palette: &Palette) -> Line<'static> {
    let marker = if active { "▌" } else { " " };
    let label = format!("{}{} {} {}", marker, entry.shortcut, entry.icon, entry.label);
    let badge_text = badge.map(|count| format!(" {} ", count)).unwrap_or_default();

    let used = label.chars().count() + badge_text.chars().count() + 1;
    let filler = " ".repeat(width.saturating_sub(used));

    let row_style = if active {
        Style::default()
            .fg(palette.active_fg)
            .bg(palette.active_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text)
    };

    let mut spans = vec![Span::styled(label, row_style), Span::styled(filler, row_style)];
    if !badge_text.is_empty() {
        spans.push(Span::styled(
            badge_text,
            Style::default()
                .fg(palette.background)
                .bg(palette.negative)
                .add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::styled(" ", row_style));
    Line::from(spans)
}

fn render_menu(f: &mut Frame, area: Rect, shell: &NavigationShell, palette: &Palette) {
    let state = shell.state();
    let width = usize::from(area.width);

    let mut lines = vec![Line::from(""); usize::from(MENU_TOP_MARGIN)];
    lines.extend(MENU.iter().map(|entry| {
        let badge = (entry.id == BADGE_ENTRY && state.notification_count > 0)
            .then_some(state.notification_count);
        menu_line(entry, entry.id == state.active_menu, badge, width, palette)
    }));

    f.render_widget(Paragraph::new(lines), area);
}

fn render_profile(f: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", ADMIN_INITIALS),
                Style::default()
                    .fg(palette.active_fg)
                    .bg(palette.active_bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}", ADMIN_NAME),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("     {}", ADMIN_EMAIL),
            Style::default().fg(palette.text_muted),
        )),
    ];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(palette.border))
        .padding(Padding::horizontal(1));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
