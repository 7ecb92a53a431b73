//! Theme system for consistent UI colors across dark and light modes.
//!
//! The whole page renders through one semantic [`Theme`] selected by the
//! two-valued [`ThemeMode`]. The mode can also be detected from the OS when
//! the user's preference is set to auto.

use ratatui::style::Color;

/// The two-valued visual style selector applied uniformly across the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme optimized for light terminal backgrounds
    Light,
    /// Dark theme optimized for dark terminal backgrounds
    Dark,
}

impl ThemeMode {
    /// Flips Light to Dark and back, returning the new mode.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Detects the OS theme mode.
    ///
    /// Uses the `dark-light` crate; falls back to dark when the OS reports
    /// no preference.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            dark_light::Mode::Light => Self::Light,
            dark_light::Mode::Dark | dark_light::Mode::Default => Self::Dark,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Semantic color theme for the TUI.
///
/// Provides consistent colors across all UI components with support for both
/// dark and light terminal backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights, selections, and focus states
    pub accent: Color,
    /// Success state color for confirmations
    pub success: Color,
    /// Error state color for validation and delivery failures
    pub error: Color,
    /// Warning state color
    pub warning: Color,

    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels and body copy
    pub text_secondary: Color,
    /// Muted text color for help text and dim content
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,
    /// Surface color for cards, modals, and elevated elements
    pub surface: Color,
}

impl Theme {
    /// Creates a theme from a mode.
    #[must_use]
    pub const fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Creates the dark showroom theme.
    ///
    /// Red/orange chrome on near-black.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Red,
            accent: Color::Rgb(255, 140, 0),
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Rgb(17, 24, 39),
            highlight_bg: Color::Rgb(55, 65, 81),
            surface: Color::Rgb(31, 41, 55),
        }
    }

    /// Creates the light showroom theme.
    ///
    /// Blue/purple chrome on white.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(120, 60, 190),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0),

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
            surface: Color::Rgb(245, 245, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_mode() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.toggle().toggle(), mode);
        }
    }

    #[test]
    fn test_theme_dark() {
        let theme = Theme::dark();
        assert_eq!(theme.text, Color::White);
        assert_eq!(theme.primary, Color::Red);
        assert_ne!(theme.background, Color::White);
    }

    #[test]
    fn test_theme_light() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
        assert_eq!(theme.background, Color::White);
        assert_eq!(theme.primary, Color::Blue);
    }

    #[test]
    fn test_from_mode() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }

    #[test]
    fn test_theme_contrast() {
        // Light text on dark background and vice versa.
        let dark = Theme::dark();
        assert_eq!(dark.text, Color::White);
        let light = Theme::light();
        assert_eq!(light.text, Color::Black);
    }

    #[test]
    fn test_detect_does_not_panic() {
        let mode = ThemeMode::detect();
        assert!(mode == ThemeMode::Dark || mode == ThemeMode::Light);
    }
}
