//! Shell main renderer
//!
//! Lays out sidebar, top bar, content area and footer, then draws the mounted view.

use super::components::{footer, sidebar, topbar};
use super::state::{Content, NavigationShell};
use crate::consts::cli_consts::layout::{
    FOOTER_HEIGHT, SIDEBAR_HEADER_HEIGHT, SIDEBAR_PROFILE_HEIGHT, SIDEBAR_WIDTH, TOPBAR_HEIGHT,
};
use crate::menu::{self, MenuId};
use crate::ui::dashboard::render_dashboard;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::prelude::Style;
use ratatui::widgets::Block;

/// Blank rows above the first menu entry.
pub const MENU_TOP_MARGIN: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarLayout {
    pub area: Rect,
    pub brand: Rect,
    pub menu: Rect,
    pub profile: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    /// Absent while the sidebar is collapsed.
    pub sidebar: Option<SidebarLayout>,
    pub topbar: Rect,
    pub content: Rect,
    pub footer: Rect,
}

pub fn shell_layout(area: Rect, sidebar_open: bool) -> ShellLayout {
    let (sidebar, main) = if sidebar_open {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Fill(1)])
            .split(area);
        (Some(sidebar_layout(columns[0])), columns[1])
    } else {
        (None, area)
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TOPBAR_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(main);

    ShellLayout {
        sidebar,
        topbar: rows[0],
        content: rows[1].inner(Margin {
            horizontal: 1,
            vertical: 0,
        }),
        footer: rows[2],
    }
}

fn sidebar_layout(area: Rect) -> SidebarLayout {
    // Last column holds the separator border.
    let column = Rect {
        width: area.width.saturating_sub(1),
        ..area
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SIDEBAR_HEADER_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(SIDEBAR_PROFILE_HEIGHT),
        ])
        .split(column);

    SidebarLayout {
        area,
        brand: rows[0],
        menu: rows[1],
        profile: rows[2],
    }
}

/// Menu entry under a terminal cell, if any.
pub fn menu_hit(layout: &ShellLayout, column: u16, row: u16) -> Option<MenuId> {
    let menu = layout.sidebar?.menu;
    let first_row = menu.y + MENU_TOP_MARGIN;
    if column < menu.x || column >= menu.x + menu.width {
        return None;
    }
    if row < first_row || row >= menu.y + menu.height {
        return None;
    }
    menu::at(usize::from(row - first_row)).map(|entry| entry.id)
}

pub fn render_shell(f: &mut Frame, shell: &NavigationShell) {
    let palette = shell.palette();
    if shell.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(palette.background)),
            f.area(),
        );
    }

    let layout = shell_layout(f.area(), shell.state().sidebar_open);

    if let Some(sidebar_layout) = &layout.sidebar {
        sidebar::render_sidebar(f, sidebar_layout, shell, &palette);
    }
    topbar::render_topbar(f, layout.topbar, shell, &palette);

    match shell.content() {
        Content::Dashboard(view) => {
            render_dashboard(f, layout.content, view, shell.tick, &palette)
        }
        Content::Placeholder(placeholder) => placeholder.render(f, layout.content, &palette),
    }

    footer::render_footer(f, layout.footer, &palette);
}
