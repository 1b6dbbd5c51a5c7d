use ratatui::style::Color;

use crate::state::SortMode;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly offset background used behind modals.
    pub mantle: Color,
    /// Strongest contrast color, used for text on highlighted rows.
    pub crust: Color,
    /// Subtle surface color for borders.
    pub surface: Color,
    /// Muted overlay color for secondary labels.
    pub overlay: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for descriptions and captions.
    pub subtext: Color,
    /// Accent for the focused input and links.
    pub sapphire: Color,
    /// Accent for group headers and modal titles.
    pub mauve: Color,
    /// Category badge color.
    pub green: Color,
    /// Not-found notice color.
    pub yellow: Color,
    /// Load-failure notice color.
    pub red: Color,
    /// Selection highlight background.
    pub lavender: Color,
}

/// Persisted color scheme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light background.
    Light,
    /// Dark background; the default when nothing is stored.
    #[default]
    Dark,
}

impl ThemeMode {
    /// Value written to the preference file.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; anything unrecognized yields `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// User-configurable settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Initial sort mode for the result list.
    pub sort_mode: SortMode,
    /// Path or URL of the catalog document.
    pub catalog_source: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sort_mode: SortMode::Relevance,
            catalog_source: crate::catalog::DEFAULT_SOURCE.to_string(),
        }
    }
}
