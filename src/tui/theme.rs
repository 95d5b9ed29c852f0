// Theme system for the TUI
//
// Two themes, switchable at runtime with the theme toggle. Each theme
// defines colors for all UI elements.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    /// Flip between dark and light
    pub fn toggle(self) -> Self {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::Dark,
        }
    }

    /// Parse a theme name, case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dark" => Some(ThemeKind::Dark),
            "light" => Some(ThemeKind::Light),
            _ => None,
        }
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
        }
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,

    // Title and status
    pub title: Color,
    pub status_bar: Color,

    // Selection
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Interactive highlights and raised field labels
    pub accent: Color,
    // Secondary text and rows not yet revealed
    pub muted: Color,

    pub success: Color,
    // Expertise glow while its effect runs
    pub highlight: Color,

    // Hero chart and demo visuals
    pub chart_primary: Color,
    pub chart_secondary: Color,

    // Skill bars
    pub gauge_fill: Color,
    pub gauge_complete: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
    pub log_trace: Color,
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
            bg: Color::Reset,
            fg: Color::White,
            border: Color::Gray,
            border_focused: Color::Cyan,

            title: Color::Cyan,
            status_bar: Color::Green,

            selected_bg: Color::DarkGray,
            selected_fg: Color::Yellow,

            accent: Color::Cyan,
            muted: Color::DarkGray,

            success: Color::Green,
            highlight: Color::Magenta,

            chart_primary: Color::Cyan,
            chart_secondary: Color::Magenta,

            gauge_fill: Color::Cyan,
            gauge_complete: Color::Green,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
            log_trace: Color::DarkGray,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            border: Color::DarkGray,
            border_focused: Color::Blue,

            title: Color::Blue,
            status_bar: Color::DarkGray,

            selected_bg: Color::LightBlue,
            selected_fg: Color::Black,

            accent: Color::Blue,
            muted: Color::Gray,

            success: Color::Green,
            highlight: Color::Magenta,

            chart_primary: Color::Blue,
            chart_secondary: Color::Magenta,

            gauge_fill: Color::Blue,
            gauge_complete: Color::Green,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11), // Dark goldenrod
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
            log_trace: Color::Gray,
        }
    }

    // Helper methods for creating styles

    /// Base style with theme foreground
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Border style (unfocused)
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Border style (focused)
    pub fn border_focused_style(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    /// Title style
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Status bar style
    pub fn status_style(&self) -> Style {
        Style::default().fg(self.status_bar)
    }

    /// Selected item style
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Muted style for secondary or unrevealed content
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Accent style for interactive highlights
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Success style
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        assert_eq!(ThemeKind::Dark.toggle(), ThemeKind::Light);
        assert_eq!(ThemeKind::Light.toggle(), ThemeKind::Dark);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(ThemeKind::parse("dark"), Some(ThemeKind::Dark));
        assert_eq!(ThemeKind::parse("Light"), Some(ThemeKind::Light));
        assert_eq!(ThemeKind::parse("DARK"), Some(ThemeKind::Dark));
        assert_eq!(ThemeKind::parse("nord"), None);
    }
}
