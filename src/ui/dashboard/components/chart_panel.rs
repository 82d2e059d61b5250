//! Chart panel component
//!
//! Projects an ordered series onto an area, bar or pie rendering.

use super::super::utils::{
    axis_ceiling, format_day_month, format_thousands, percentages, proportional_widths,
};
use crate::stats::SeriesPoint;
use crate::theme::{Palette, series_color};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Dataset, GraphType,
    Padding, Paragraph,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Filled line over an ordered (time) axis.
    Area,
    /// Bars in the given direction.
    Bar(Direction),
    /// Share of each point in the total.
    Pie,
}

#[derive(Debug, Clone)]
pub struct ChartPanel<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub kind: ChartKind,
    pub points: Vec<SeriesPoint>,
    pub color: Color,
}

/// One pie slice with its rounded share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
    pub percent: u64,
}

pub fn pie_slices(points: &[SeriesPoint]) -> Vec<PieSlice> {
    let values: Vec<u64> = points.iter().map(|p| p.value).collect();
    points
        .iter()
        .zip(percentages(&values))
        .map(|(point, percent)| PieSlice {
            label: point.label.clone(),
            value: point.value,
            percent,
        })
        .collect()
}

/// Linear interpolation of `steps` samples per segment, used to paint the area under the line.
pub fn densify(data: &[(f64, f64)], steps: usize) -> Vec<(f64, f64)> {
    let steps = steps.max(1);
    let mut out = Vec::with_capacity(data.len() * steps);
    for pair in data.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        for step in 0..steps {
            let t = step as f64 / steps as f64;
            out.push((x0 + (x1 - x0) * t, y0 + (y1 - y0) * t));
        }
    }
    if let Some(&last) = data.last() {
        out.push(last);
    }
    out
}

impl ChartPanel<'_> {
    pub fn render(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Fill(1)])
            .split(inner);

        f.render_widget(
            Paragraph::new(Span::styled(
                self.description,
                Style::default().fg(palette.text_muted),
            )),
            chunks[0],
        );

        match self.kind {
            ChartKind::Area => self.render_area(f, chunks[1], palette),
            ChartKind::Bar(direction) => self.render_bars(f, chunks[1], direction, palette),
            ChartKind::Pie => self.render_pie(f, chunks[1], palette),
        }
    }

    fn render_area(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let data: Vec<(f64, f64)> = self
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.value as f64))
            .collect();
        let fill = densify(&data, 8);

        let max = self.points.iter().map(|p| p.value).max().unwrap_or(0);
        let ceiling = axis_ceiling(max);
        let x_max = (self.points.len().saturating_sub(1)).max(1) as f64;

        let datasets = vec![
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Bar)
                .style(Style::default().fg(palette.active_bg))
                .data(&fill),
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(self.color))
                .data(&data),
        ];

        let x_labels: Vec<String> = self
            .points
            .iter()
            .map(|p| format_day_month(&p.label))
            .collect();
        let y_labels = vec![
            "0".to_string(),
            format_thousands(ceiling / 2),
            format_thousands(ceiling),
        ];

        let chart = Chart::new(datasets)
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(palette.text_muted))
                    .bounds([0.0, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(palette.text_muted))
                    .bounds([0.0, ceiling as f64])
                    .labels(y_labels),
            );
        f.render_widget(chart, area);
    }

    fn render_bars(&self, f: &mut Frame, area: Rect, direction: Direction, palette: &Palette) {
        let bars: Vec<Bar> = self
            .points
            .iter()
            .map(|p| {
                Bar::default()
                    .value(p.value)
                    .label(Line::from(p.label.clone()))
                    .text_value(format_thousands(p.value))
            })
            .collect();

        let count = self.points.len().max(1) as u16;
        let bar_width = match direction {
            Direction::Horizontal => 1,
            Direction::Vertical => (area.width.saturating_sub(count) / count).clamp(3, 14),
        };

        let chart = BarChart::default()
            .data(BarGroup::default().bars(&bars))
            .direction(direction)
            .bar_width(bar_width)
            .bar_gap(1)
            .bar_style(Style::default().fg(self.color))
            .value_style(
                Style::default()
                    .fg(palette.background)
                    .bg(self.color)
                    .add_modifier(Modifier::BOLD),
            )
            .label_style(Style::default().fg(palette.text_muted));
        f.render_widget(chart, area);
    }

    fn render_pie(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let slices = pie_slices(&self.points);
        let values: Vec<u64> = slices.iter().map(|s| s.value).collect();
        let widths = proportional_widths(&values, area.width);

        let ring: Vec<Span> = widths
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                Span::styled(
                    "█".repeat(usize::from(w)),
                    Style::default().fg(series_color(i)),
                )
            })
            .collect();

        let mut lines = vec![Line::from(ring), Line::from("")];
        for (i, slice) in slices.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled("■ ", Style::default().fg(series_color(i))),
                Span::styled(slice.label.clone(), Style::default().fg(palette.text)),
                Span::styled(
                    format!(
                        "  {}  {}%",
                        format_thousands(slice.value),
                        slice.percent
                    ),
                    Style::default().fg(palette.text_muted),
                ),
            ]));
        }

        f.render_widget(Paragraph::new(lines), area);
    }
}
