// Theme system for the TUI
//
// Provides color themes that can be switched at runtime with `t`.
// Each theme defines colors for every part of the table screen.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Nord,
    Monokai,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Dark,
            ThemeKind::Light,
            ThemeKind::Nord,
            ThemeKind::Monokai,
        ]
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Nord => "Nord",
            ThemeKind::Monokai => "Monokai",
        }
    }

    /// Look up a theme by name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Nord => Theme::nord(),
            ThemeKind::Monokai => Theme::monokai(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_type: BorderType,

    pub title: Color,
    pub status_bar: Color,
    pub highlight: Color,

    // Header row
    pub header: Color,
    pub sort_indicator: Color,

    // Inputs
    pub input: Color,
    pub placeholder: Color,

    // Focus ring
    pub selection: Color,
    pub selection_fg: Color,

    // Body
    pub row_alt: Color,

    // Footer buttons
    pub button: Color,
    pub disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            border: Color::Gray,
            border_type: BorderType::Rounded,

            title: Color::Cyan,
            status_bar: Color::Green,
            highlight: Color::Cyan,

            header: Color::Cyan,
            sort_indicator: Color::Yellow,

            input: Color::White,
            placeholder: Color::DarkGray,

            selection: Color::DarkGray,
            selection_fg: Color::Yellow,

            row_alt: Color::Gray,

            button: Color::LightBlue,
            disabled: Color::DarkGray,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            border: Color::DarkGray,
            border_type: BorderType::Plain,

            title: Color::Blue,
            status_bar: Color::DarkGray,
            highlight: Color::Blue,

            header: Color::Blue,
            sort_indicator: Color::Rgb(184, 134, 11), // Dark goldenrod

            input: Color::Black,
            placeholder: Color::Gray,

            selection: Color::LightBlue,
            selection_fg: Color::Black,

            row_alt: Color::DarkGray,

            button: Color::Blue,
            disabled: Color::Gray,
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(216, 222, 233),
            border: Color::Rgb(76, 86, 106),
            border_type: BorderType::Rounded,

            title: Color::Rgb(136, 192, 208),
            status_bar: Color::Rgb(163, 190, 140),
            highlight: Color::Rgb(136, 192, 208),

            header: Color::Rgb(129, 161, 193),
            sort_indicator: Color::Rgb(235, 203, 139),

            input: Color::Rgb(229, 233, 240),
            placeholder: Color::Rgb(76, 86, 106),

            selection: Color::Rgb(67, 76, 94),
            selection_fg: Color::Rgb(235, 203, 139),

            row_alt: Color::Rgb(180, 188, 204),

            button: Color::Rgb(136, 192, 208),
            disabled: Color::Rgb(76, 86, 106),
        }
    }

    /// Monokai theme
    pub fn monokai() -> Self {
        Self {
            background: Color::Rgb(39, 40, 34),
            foreground: Color::Rgb(248, 248, 242),
            border: Color::Rgb(117, 113, 94),
            border_type: BorderType::Double,

            title: Color::Rgb(166, 226, 46),       // Green
            status_bar: Color::Rgb(102, 217, 239), // Cyan
            highlight: Color::Rgb(166, 226, 46),

            header: Color::Rgb(102, 217, 239),
            sort_indicator: Color::Rgb(230, 219, 116), // Yellow

            input: Color::Rgb(248, 248, 242),
            placeholder: Color::Rgb(117, 113, 94),

            selection: Color::Rgb(73, 72, 62),
            selection_fg: Color::Rgb(230, 219, 116),

            row_alt: Color::Rgb(190, 190, 180),

            button: Color::Rgb(174, 129, 255), // Purple
            disabled: Color::Rgb(117, 113, 94),
        }
    }

    /// Style for a focused control
    pub fn focused(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection)
            .add_modifier(Modifier::BOLD)
    }
}
