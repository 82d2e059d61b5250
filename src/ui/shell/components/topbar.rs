//! Top bar component
//!
//! Active page title and subtitle on the left; theme, notifications and the
//! administrator avatar on the right. Doubles as the go-to-path prompt.

use super::super::state::NavigationShell;
use crate::consts::cli_consts::{ADMIN_INITIALS, TOPBAR_SUBTITLE};
use crate::theme::Palette;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

/// Title shown for the active entry, falling back to "Dashboard".
pub fn page_title(shell: &NavigationShell) -> &'static str {
    let label = shell.active_entry().label;
    if label.is_empty() { "Dashboard" } else { label }
}

pub fn theme_label(dark_mode: bool) -> &'static str {
    if dark_mode { "☾ Escuro" } else { "☀ Claro" }
}

pub fn render_topbar(f: &mut Frame, area: Rect, shell: &NavigationShell, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border))
        .padding(Padding::new(1, 1, 1, 0));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(36)])
        .split(inner);

    let title_line = match shell.path_prompt() {
        Some(typed) => Line::from(vec![
            Span::styled(
                "Ir para: ",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("{}█", typed), Style::default().fg(palette.text)),
        ]),
        None => Line::from(vec![
            Span::styled("≡ ", Style::default().fg(palette.text_muted)),
            Span::styled(
                page_title(shell),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    };
    let left = vec![
        title_line,
        Line::from(Span::styled(
            TOPBAR_SUBTITLE,
            Style::default().fg(palette.text_muted),
        )),
    ];
    f.render_widget(Paragraph::new(left), columns[0]);

    let state = shell.state();
    let mut right = vec![
        Span::styled(
            theme_label(state.dark_mode),
            Style::default().fg(palette.text_muted),
        ),
        Span::raw("   "),
        Span::styled("Alertas", Style::default().fg(palette.text)),
    ];
    if state.notification_count > 0 {
        right.push(Span::raw(" "));
        right.push(Span::styled(
            format!(" {} ", state.notification_count),
            Style::default()
                .fg(palette.background)
                .bg(palette.negative)
                .add_modifier(Modifier::BOLD),
        ));
    }
    right.push(Span::raw("   "));
    right.push(Span::styled(
        format!(" {} ", ADMIN_INITIALS),
        Style::default()
            .fg(palette.active_fg)
            .bg(palette.active_bg)
            .add_modifier(Modifier::BOLD),
    ));

    f.render_widget(
        Paragraph::new(Line::from(right)).alignment(Alignment::Right),
        columns[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuId;
    use crate::router::DEFAULT_PATH;
    use crate::stats::MockPayloadSource;
    use crate::theme::ThemeMarker;
    use crate::ui::app::UIConfig;
    use crate::ui::test_support::render_to_string;
    use std::sync::Arc;

    fn shell() -> NavigationShell {
        let config = UIConfig {
            start_path: DEFAULT_PATH.to_string(),
            sidebar_open: true,
            dark_mode: false,
            with_background_color: false,
            show_splash: false,
        };
        NavigationShell::mount(
            &config,
            Arc::new(MockPayloadSource::immediate()),
            ThemeMarker::isolated(),
        )
    }

    #[tokio::test]
    async fn title_follows_the_active_entry() {
        let mut shell = shell();
        assert_eq!(page_title(&shell), "Dashboard");
        shell.select(MenuId::Financial);
        assert_eq!(page_title(&shell), "Mercado");
    }

    #[tokio::test]
    async fn topbar_shows_badge_theme_and_prompt() {
        let mut shell = shell();
        let draw = |shell: &NavigationShell| {
            render_to_string(120, 4, |f| {
                render_topbar(f, f.area(), shell, &Palette::LIGHT)
            })
        };

        let screen = draw(&shell);
        assert!(screen.contains("≡ Dashboard"));
        assert!(screen.contains(TOPBAR_SUBTITLE));
        assert!(screen.contains("☀ Claro"));
        assert!(screen.contains(" 3 "));
        assert!(screen.contains(" AD "));

        shell.toggle_dark_mode();
        shell.open_path_prompt();
        shell.push_prompt_char('/');
        shell.push_prompt_char('u');
        let screen = draw(&shell);
        assert!(screen.contains("Ir para: /u█"));
        assert!(screen.contains("☾ Escuro"));
    }
}
