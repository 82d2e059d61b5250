//! Dashboard utility functions
//!
//! Number and label formatting shared by the panels and the headless snapshot.

use crate::stats::{Accent, ActivityKind};
use chrono::NaiveDate;
use ratatui::prelude::Color;

/// Formats a count with `.` thousands separators, e.g. `15420` -> `15.420`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Formats a delta with an explicit sign, e.g. `+1250`.
pub fn format_delta(change: i64) -> String {
    format!("{:+}", change)
}

/// Turns an ISO date label into `dd/mm`. Labels that are not dates pass through.
pub fn format_day_month(label: &str) -> String {
    match NaiveDate::parse_from_str(label, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m").to_string(),
        Err(_) => label.to_string(),
    }
}

/// Whole-number share of each value in the total, rounded like a pie label.
pub fn percentages(values: &[u64]) -> Vec<u64> {
    let total = wide_sum(values);
    if total == 0 {
        return vec![0; values.len()];
    }
    values
        .iter()
        .map(|&v| ((v as f64 / total as f64) * 100.0).round() as u64)
        .collect()
}

/// Sum in `u128`, which cannot overflow for any slice of `u64` counts.
fn wide_sum(values: &[u64]) -> u128 {
    values.iter().map(|&v| u128::from(v)).sum()
}

/// Splits `width` cells between values proportionally, largest remainder
/// first, so the widths always add up to `width` when the total is non-zero.
pub fn proportional_widths(values: &[u64], width: u16) -> Vec<u16> {
    let total = wide_sum(values);
    if total == 0 || values.is_empty() {
        return vec![0; values.len()];
    }

    let exact: Vec<f64> = values
        .iter()
        .map(|&v| v as f64 / total as f64 * f64::from(width))
        .collect();
    let mut widths: Vec<u16> = exact.iter().map(|w| w.floor() as u16).collect();

    let assigned: u16 = widths.iter().sum();
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        let ra = exact[a] - exact[a].floor();
        let rb = exact[b] - exact[b].floor();
        rb.total_cmp(&ra).then(a.cmp(&b))
    });
    for &index in order.iter().take(usize::from(width.saturating_sub(assigned))) {
        widths[index] += 1;
    }
    widths
}

/// Upper bound for a chart axis: the max value rounded up to a multiple of 50.
pub fn axis_ceiling(max: u64) -> u64 {
    let step = 50;
    max.div_ceil(step).saturating_mul(step).max(step)
}

pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Blue => Color::Rgb(59, 130, 246),
        Accent::Green => Color::Rgb(16, 185, 129),
        Accent::Purple => Color::Rgb(139, 92, 246),
        Accent::Red => Color::Rgb(239, 68, 68),
    }
}

/// Dot color for an activity feed entry.
pub fn activity_color(kind: ActivityKind) -> Color {
    match kind {
        ActivityKind::User => Color::Rgb(59, 130, 246),
        ActivityKind::Product => Color::Rgb(34, 197, 94),
        ActivityKind::Complaint => Color::Rgb(239, 68, 68),
        ActivityKind::Provider => Color::Rgb(168, 85, 247),
        ActivityKind::Connection => Color::Rgb(236, 72, 153),
    }
}
