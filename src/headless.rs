//! Headless commands
//!
//! Plain-text renditions of the dashboard data and the route table for
//! `snapshot`, `routes` and `resolve`.

use crate::menu::MENU;
use crate::router::{self, ROUTES, Resolution, Route, ViewKind};
use crate::stats::{DashboardSource, DashboardStats, RECENT_ACTIVITY, StatsError};
use crate::ui::dashboard::components::chart_panel::{ChartKind, pie_slices};
use crate::ui::dashboard::components::stat_panel::direction_indicator;
use crate::ui::dashboard::renderer::chart_panels;
use crate::ui::dashboard::utils::{format_day_month, format_delta, format_thousands};
use std::fmt::{self, Write};

/// Fetches and validates one payload, the same way the dashboard view does.
pub async fn load_stats(source: &dyn DashboardSource) -> Result<DashboardStats, StatsError> {
    let stats = source.fetch().await?;
    stats.validate()?;
    Ok(stats)
}

pub fn snapshot_json(stats: &DashboardStats) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(stats)
}

pub fn snapshot_text(stats: &DashboardStats) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "ESTATÍSTICAS")?;
    for card in stats.stat_cards() {
        writeln!(
            out,
            "  {} {:<20} {:>8}  {} {} nos últimos 30 dias",
            card.icon,
            card.title,
            format_thousands(card.value),
            direction_indicator(card.change_type),
            format_delta(card.change)
        )?;
    }

    for panel in chart_panels(stats) {
        writeln!(out)?;
        writeln!(out, "{} ({})", panel.title.to_uppercase(), panel.description)?;
        match panel.kind {
            ChartKind::Pie => {
                for slice in pie_slices(&panel.points) {
                    writeln!(
                        out,
                        "  {:<16} {:>6}  {:>3}%",
                        slice.label, slice.value, slice.percent
                    )?;
                }
            }
            ChartKind::Area | ChartKind::Bar(_) => {
                for point in &panel.points {
                    writeln!(
                        out,
                        "  {:<16} {:>6}",
                        format_day_month(&point.label),
                        point.value
                    )?;
                }
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "ATIVIDADE RECENTE")?;
    for entry in RECENT_ACTIVITY.iter() {
        writeln!(out, "  ● {} por {} ({})", entry.action, entry.actor, entry.time)?;
    }
    Ok(out)
}

fn view_name(route: &Route) -> &'static str {
    match route.view {
        ViewKind::Dashboard => "dashboard",
        ViewKind::Placeholder(placeholder) => placeholder.title,
    }
}

pub fn routes_table() -> Result<String, fmt::Error> {
    let mut out = String::new();
    for (entry, route) in MENU.iter().zip(ROUTES.iter()) {
        writeln!(
            out,
            "[{}] {:<14} {:<18} {}",
            entry.shortcut,
            route.path,
            entry.label,
            view_name(route)
        )?;
    }
    Ok(out)
}

pub fn describe_resolution(requested: &str, resolution: &Resolution) -> String {
    let route = resolution.route;
    let mut line = format!(
        "{} -> {} ({}: {})",
        requested,
        route.path,
        route.menu.entry().label,
        view_name(route)
    );
    if resolution.redirected {
        line.push_str(" [redirecionado]");
    }
    line
}

/// Resolves `path` and describes the outcome.
pub fn resolve(path: &str) -> (Resolution, String) {
    let resolution = router::resolve(path);
    let description = describe_resolution(path, &resolution);
    (resolution, description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::source::MockDashboardSource;
    use crate::stats::{MockPayloadSource, mock_payload};

    #[test]
    fn snapshot_text_carries_payload_values() {
        let text = snapshot_text(&mock_payload()).unwrap();
        assert!(text.contains("15.420"));
        assert!(text.contains("▲ +1250"));
        assert!(text.contains("▼ +23"));
        assert!(text.contains("CONVERSAS DIÁRIAS"));
        assert!(text.contains("Resolvida"));
        assert!(text.contains("65%"));
        assert_eq!(text.matches("  ● ").count(), RECENT_ACTIVITY.len());
    }

    #[tokio::test]
    async fn snapshot_text_handles_counts_near_the_integer_limit() {
        let mut source = MockDashboardSource::new();
        source.expect_fetch().returning(|| {
            let mut stats = mock_payload();
            stats.charts.complaint_status[0].count = u64::MAX;
            stats.charts.complaint_status[1].count = u64::MAX;
            stats.charts.daily_conversations[0].count = u64::MAX;
            Ok(stats)
        });

        let stats = load_stats(&source).await.unwrap();
        let text = snapshot_text(&stats).unwrap();
        assert!(text.contains(&u64::MAX.to_string()));
        assert!(text.contains(" 50%"));
        assert!(text.contains("  0%"));
    }

    #[test]
    fn snapshot_json_is_the_payload_shape() {
        let json = snapshot_json(&mock_payload()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["overview"]["total_users"], 15420);
        assert_eq!(value["charts"]["daily_conversations"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn routes_table_lists_every_path() {
        let table = routes_table().unwrap();
        assert_eq!(table.lines().count(), ROUTES.len());
        assert!(table.contains("[7] /complaints"));
        assert!(table.contains("Gestão de Reclamações"));
    }

    #[test]
    fn unknown_paths_are_marked_as_redirects() {
        let (resolution, text) = resolve("/reports");
        assert!(resolution.redirected);
        assert_eq!(text, "/reports -> / (Dashboard: dashboard) [redirecionado]");

        let (resolution, text) = resolve("/users/");
        assert!(!resolution.redirected);
        assert!(text.starts_with("/users/ -> /users (Usuários"));
    }

    #[tokio::test]
    async fn load_stats_validates_the_payload() {
        let stats = load_stats(&MockPayloadSource::immediate()).await.unwrap();
        assert_eq!(stats, mock_payload());

        let mut source = MockDashboardSource::new();
        source.expect_fetch().returning(|| {
            let mut stats = mock_payload();
            stats.charts.complaint_status.clear();
            Ok(stats)
        });
        let result = load_stats(&source).await;
        assert!(matches!(result, Err(StatsError::Malformed(_))));
    }
}
