//! Dashboard main renderer

use super::components::activity::render_activity_feed;
use super::components::chart_panel::{ChartKind, ChartPanel};
use super::components::stat_panel::{render_loading_panel, render_stat_panel};
use super::state::{DashboardView, LoadState};
use crate::stats::{DashboardStats, RECENT_ACTIVITY, StatsError};
use crate::theme::{Palette, series_color};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// The four chart panels of a loaded dashboard, in display order.
pub fn chart_panels(stats: &DashboardStats) -> [ChartPanel<'static>; 4] {
    [
        ChartPanel {
            title: "Conversas Diárias",
            description: "Atividade dos últimos 7 dias",
            kind: ChartKind::Area,
            points: stats.daily_conversations(),
            color: series_color(0),
        },
        ChartPanel {
            title: "Status das Reclamações",
            description: "Distribuição por status",
            kind: ChartKind::Pie,
            points: stats.complaint_status(),
            color: series_color(3),
        },
        ChartPanel {
            title: "Top Categorias",
            description: "Produtos mais populares",
            kind: ChartKind::Bar(Direction::Horizontal),
            points: stats.top_product_categories(),
            color: series_color(1),
        },
        ChartPanel {
            title: "Top Especialidades",
            description: "Prestadores mais procurados",
            kind: ChartKind::Bar(Direction::Vertical),
            points: stats.top_provider_specialties(),
            color: series_color(4),
        },
    ]
}

pub fn render_dashboard(
    f: &mut Frame,
    area: Rect,
    view: &DashboardView,
    tick: usize,
    palette: &Palette,
) {
    match view.state() {
        LoadState::Loading { .. } => render_loading(f, area, tick, palette),
        LoadState::Loaded(stats) => render_loaded(f, area, stats, palette),
        LoadState::Failed { error } => render_failed(f, area, error, palette),
    }
}

fn card_row(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area)
}

fn render_loading(f: &mut Frame, area: Rect, tick: usize, palette: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Fill(1)])
        .split(area);

    for (i, cell) in card_row(rows[0]).iter().enumerate() {
        render_loading_panel(f, *cell, tick + i, palette);
    }
}

fn render_loaded(f: &mut Frame, area: Rect, stats: &DashboardStats, palette: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Length(RECENT_ACTIVITY.len() as u16 + 3),
        ])
        .split(area);

    for (card, cell) in stats.stat_cards().iter().zip(card_row(rows[0]).iter()) {
        render_stat_panel(f, *cell, card, palette);
    }

    let panels = chart_panels(stats);
    for (pair, row) in panels.chunks(2).zip([rows[1], rows[2]]) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row);
        for (panel, cell) in pair.iter().zip(cells.iter()) {
            panel.render(f, *cell, palette);
        }
    }

    render_activity_feed(f, rows[3], &RECENT_ACTIVITY, palette);
}

fn render_failed(f: &mut Frame, area: Rect, error: &StatsError, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled(
            "Não foi possível carregar as estatísticas",
            Style::default()
                .fg(palette.negative)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(palette.text_muted),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[R] Tentar novamente",
            Style::default().fg(palette.accent),
        )),
    ];

    let block = Block::default()
        .title(" Dashboard ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.negative))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::source::MockDashboardSource;
    use crate::stats::{MockPayloadSource, mock_payload};
    use crate::ui::test_support::render_to_string;
    use std::sync::Arc;
    use std::time::Duration;

    async fn settle(view: &mut DashboardView) {
        for _ in 0..200 {
            if view.poll() || !view.is_loading() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("dashboard never left the loading state");
    }

    fn draw(view: &DashboardView) -> String {
        render_to_string(160, 48, |f| {
            render_dashboard(f, f.area(), view, 0, &Palette::LIGHT)
        })
    }

    #[test]
    fn chart_panels_match_the_dashboard_layout() {
        let panels = chart_panels(&mock_payload());
        let kinds: Vec<ChartKind> = panels.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ChartKind::Area,
                ChartKind::Pie,
                ChartKind::Bar(Direction::Horizontal),
                ChartKind::Bar(Direction::Vertical),
            ]
        );
        assert_eq!(panels[0].points.len(), 7);
        assert_eq!(panels[1].points.len(), 4);
    }

    #[tokio::test]
    async fn loading_shows_no_values() {
        let view = DashboardView::mount(Arc::new(MockPayloadSource::new(Duration::from_secs(60))));
        let screen = draw(&view);
        assert_eq!(screen.matches("Carregando...").count(), 4);
        assert!(!screen.contains("15.420"));
        assert!(!screen.contains("+1250"));
        assert!(!screen.contains("Atividade Recente"));
    }

    #[tokio::test]
    async fn loaded_dashboard_renders_payload_verbatim() {
        let mut view = DashboardView::mount(Arc::new(MockPayloadSource::immediate()));
        settle(&mut view).await;
        let screen = draw(&view);

        for value in ["15.420", "2.340", "8.750", "156"] {
            assert!(screen.contains(value), "missing {value}");
        }
        for change in ["▲ +1250", "▲ +180", "▲ +650", "▼ +23"] {
            assert!(screen.contains(change), "missing {change}");
        }
        assert!(screen.contains("Conversas Diárias"));
        assert!(screen.contains("Resolvida"));
        assert!(screen.contains("65%"));
        assert!(screen.contains("Eletricista"));
        assert_eq!(screen.matches("● ").count(), RECENT_ACTIVITY.len());
        assert!(!screen.contains("Carregando..."));
    }

    #[tokio::test]
    async fn loaded_dashboard_renders_counts_near_the_integer_limit() {
        let mut source = MockDashboardSource::new();
        source.expect_name().return_const("huge".to_string());
        source.expect_fetch().returning(|| {
            let mut stats = mock_payload();
            for (i, status) in stats.charts.complaint_status.iter_mut().enumerate() {
                status.count = if i == 0 { u64::MAX } else { 1 };
            }
            stats.charts.daily_conversations[3].count = u64::MAX;
            Ok(stats)
        });
        let mut view = DashboardView::mount(Arc::new(source));
        settle(&mut view).await;

        let screen = draw(&view);
        assert!(screen.contains("100%"));
        assert!(screen.contains("Rejeitada"));
        assert!(!screen.contains("Não foi possível carregar"));
    }

    #[tokio::test]
    async fn failed_dashboard_renders_error_panel_only() {
        let mut source = MockDashboardSource::new();
        source.expect_name().return_const("down".to_string());
        source
            .expect_fetch()
            .returning(|| Err(StatsError::Unavailable("timeout".to_string())));
        let mut view = DashboardView::mount(Arc::new(source));
        settle(&mut view).await;

        let screen = draw(&view);
        assert!(screen.contains("Não foi possível carregar as estatísticas"));
        assert!(screen.contains("Dashboard source unavailable: timeout"));
        assert!(screen.contains("[R] Tentar novamente"));
        assert!(!screen.contains("nos últimos 30 dias"));
    }
}
