//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents compiled into the binary (built-ins) or read
//! from a user file. Colors are hex strings turned into 24-bit ANSI escapes
//! at render time.
//!
//! # Built-in Themes
//!
//! - `pokedex-red`: Dark theme with the classic red device accents (default)
//! - `catppuccin-mocha`: Dark theme with warm tones
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#ffffff"
//! header_bg = "#c62828"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#ffcb05"
//! text_normal = "#e0e0e0"
//! text_dim = "#8a8a8a"
//! border = "#5a5a5a"
//! search_bar_border = "#ef5350"
//! error_fg = "#ff6e6e"
//! accent_fg = "#ffcb05"
//! stat_bar_fg = "#66bb6a"
//! empty_state_fg = "#90caf9"
//! ```
//!
//! # Example
//!
//! ```rust
//! use pokedex::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap_or_default();
//! print!("{}Bold{}", Theme::bold(), Theme::reset());
//! assert!(Theme::fg(&theme.colors.header_fg).starts_with("\u{1b}[38;2;"));
//! ```

use crate::domain::{PokedexError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "pokedex-red";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected card foreground color.
    pub selection_fg: String,
    /// Selected card background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, image URIs, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,

    /// Home screen message color.
    pub error_fg: String,

    /// Ids, labels and other highlighted text.
    pub accent_fg: String,

    /// Stat bar color on the detail screen.
    pub stat_bar_fg: String,

    /// Empty state message color.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "pokedex-red" => include_str!("../../themes/pokedex-red.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`PokedexError::Io`] if the file cannot be read, or
    /// [`PokedexError::Theme`] if its content does not parse as a theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents).map_err(|e| PokedexError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Parses `#rrggbb` (leading `#` optional). Anything else renders white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling (colors, bold, dim).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Palette used if the bundled default theme ever fails to parse.
    fn fallback() -> Self {
        let color = |hex: &str| hex.to_string();
        Self {
            name: DEFAULT_THEME.to_string(),
            colors: ThemeColors {
                header_fg: color("#ffffff"),
                header_bg: Some(color("#c62828")),
                selection_fg: color("#1e1e1e"),
                selection_bg: color("#ffcb05"),
                text_normal: color("#e0e0e0"),
                text_dim: color("#8a8a8a"),
                border: color("#5a5a5a"),
                search_bar_border: color("#ef5350"),
                error_fg: color("#ff6e6e"),
                accent_fg: color("#ffcb05"),
                stat_bar_fg: color("#66bb6a"),
                empty_state_fg: color("#90caf9"),
            },
        }
    }
}

impl Default for Theme {
    /// Returns the `pokedex-red` theme.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::fallback)
    }
}
