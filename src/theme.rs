//! Theme marker and color palettes
//!
//! The dark theme is a single process-wide flag, the terminal counterpart of a
//! class on the document root. It starts unset, follows the shell's dark mode
//! toggle and is cleared when the shell is dropped. It is never persisted.

use ratatui::style::Color;
use std::sync::atomic::{AtomicBool, Ordering};

static DOCUMENT_ROOT_DARK: AtomicBool = AtomicBool::new(false);

/// Handle on a theme marker flag.
#[derive(Debug, Clone, Copy)]
pub struct ThemeMarker {
    flag: &'static AtomicBool,
}

impl ThemeMarker {
    /// The process-wide marker.
    pub fn document_root() -> Self {
        Self {
            flag: &DOCUMENT_ROOT_DARK,
        }
    }

    /// A private marker, so tests do not race on the global one.
    #[cfg(test)]
    pub fn isolated() -> Self {
        Self {
            flag: Box::leak(Box::new(AtomicBool::new(false))),
        }
    }

    /// Sets or removes the dark marker.
    pub fn apply(&self, dark: bool) {
        self.flag.store(dark, Ordering::SeqCst);
    }

    pub fn clear(&self) {
        self.apply(false);
    }

    pub fn is_dark(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Palette matching the marker's current value.
    pub fn palette(&self) -> Palette {
        if self.is_dark() {
            Palette::DARK
        } else {
            Palette::LIGHT
        }
    }
}

/// Colors used by every panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub sidebar_bg: Color,
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    pub accent: Color,
    pub active_bg: Color,
    pub active_fg: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(248, 250, 252),
        sidebar_bg: Color::Rgb(241, 245, 249),
        text: Color::Rgb(15, 23, 42),
        text_muted: Color::Rgb(100, 116, 139),
        border: Color::Rgb(203, 213, 225),
        accent: Color::Rgb(59, 130, 246),
        active_bg: Color::Rgb(219, 234, 254),
        active_fg: Color::Rgb(30, 64, 175),
        positive: Color::Rgb(22, 163, 74),
        negative: Color::Rgb(220, 38, 38),
        warning: Color::Rgb(217, 119, 6),
    };

    pub const DARK: Palette = Palette {
        background: Color::Rgb(16, 20, 24),
        sidebar_bg: Color::Rgb(24, 30, 38),
        text: Color::Rgb(226, 232, 240),
        text_muted: Color::Rgb(148, 163, 184),
        border: Color::Rgb(51, 65, 85),
        accent: Color::Rgb(96, 165, 250),
        active_bg: Color::Rgb(30, 41, 59),
        active_fg: Color::Rgb(147, 197, 253),
        positive: Color::Rgb(34, 197, 94),
        negative: Color::Rgb(239, 68, 68),
        warning: Color::Rgb(245, 158, 11),
    };
}

/// Series colors, cycled by slice index.
pub const SERIES_COLORS: [Color; 5] = [
    Color::Rgb(59, 130, 246),
    Color::Rgb(16, 185, 129),
    Color::Rgb(245, 158, 11),
    Color::Rgb(239, 68, 68),
    Color::Rgb(139, 92, 246),
];

pub fn series_color(index: usize) -> Color {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_follows_apply_and_clear() {
        let marker = ThemeMarker::isolated();
        assert!(!marker.is_dark());

        marker.apply(true);
        assert!(marker.is_dark());
        assert_eq!(marker.palette(), Palette::DARK);

        marker.clear();
        assert!(!marker.is_dark());
        assert_eq!(marker.palette(), Palette::LIGHT);
    }

    #[test]
    fn copies_share_the_same_flag() {
        let marker = ThemeMarker::isolated();
        let copy = marker;
        marker.apply(true);
        assert!(copy.is_dark());
    }

    #[test]
    fn series_colors_cycle() {
        assert_eq!(series_color(0), series_color(SERIES_COLORS.len()));
        assert_ne!(series_color(0), series_color(1));
    }
}
