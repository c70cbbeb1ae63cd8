//! Color palettes and theme loading.
//!
//! This module defines the color scheme system for the UI, supporting both
//! built-in themes and custom themes loaded from TOML files. Colors are
//! 256-color terminal indices so they degrade predictably on terminals without
//! truecolor support.
//!
//! # Built-in Themes
//!
//! - `default`: Blue headers, orange highlights, grey selection bar
//! - `high-contrast`: Saturated colors on a dark blue selection bar
//! - `monochrome`: Greyscale only
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [palette]
//! header = 75
//! accent = 204
//! highlight = 214
//! muted = 244
//! match = 220
//! input_hint = 110
//! selected_bg = 237
//! danger_bg = 52
//! ```
//!
//! # Process Palette
//!
//! Style functions in [`text`](crate::ui::text) read the palette installed
//! with [`install`]. Installation happens once during startup; until then (and
//! in tests) the default palette is used.
//!
//! # Example
//!
//! ```rust
//! use betters3tui::ui::theme::{Palette, Theme};
//!
//! let theme = Theme::from_name("monochrome").unwrap();
//! assert_eq!(theme.name, "monochrome");
//! assert_eq!(Theme::default().palette, Palette::DEFAULT);
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::domain::{BetterS3Error, Result};

/// Names of the themes compiled into the binary.
pub const BUILTIN_THEMES: [&str; 3] = ["default", "high-contrast", "monochrome"];

static ACTIVE_PALETTE: OnceLock<Palette> = OnceLock::new();

/// Named color scheme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub palette: Palette,
}

/// 256-color indices for every semantic UI color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Palette {
    /// Header and title text.
    pub header: u8,
    /// Errors and destructive actions.
    pub accent: u8,
    /// Emphasized text and status messages.
    pub highlight: u8,
    /// Placeholders and secondary text.
    pub muted: u8,
    /// Fuzzy-match character highlight.
    #[serde(rename = "match")]
    pub match_fg: u8,
    /// Input hint text next to the search field.
    pub input_hint: u8,
    /// Background of the selected row.
    pub selected_bg: u8,
    /// Background of rows awaiting a destructive confirmation.
    pub danger_bg: u8,
}

impl Palette {
    /// Palette of the `default` theme.
    pub const DEFAULT: Self = Self {
        header: 75,
        accent: 204,
        highlight: 214,
        muted: 244,
        match_fg: 220,
        input_hint: 110,
        selected_bg: 237,
        danger_bg: 52,
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names are listed in [`BUILTIN_THEMES`].
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "default" => include_str!("../../themes/default.toml"),
            "high-contrast" => include_str!("../../themes/high-contrast.toml"),
            "monochrome" => include_str!("../../themes/monochrome.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BetterS3Error::Theme`] if:
    /// - The file cannot be read (file not found, permission denied, etc.)
    /// - The TOML content cannot be parsed (invalid syntax, missing fields,
    ///   values outside `0..=255`)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            BetterS3Error::Theme(format!("failed to read theme file {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| BetterS3Error::Theme(format!("failed to parse theme TOML: {e}")))
    }
}

impl Default for Theme {
    /// Returns the `default` theme.
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            palette: Palette::DEFAULT,
        }
    }
}

/// Installs `theme` as the process palette.
///
/// Only the first call takes effect. Returns `false` if a palette was already
/// installed.
pub fn install(theme: &Theme) -> bool {
    let installed = ACTIVE_PALETTE.set(theme.palette).is_ok();
    if installed {
        tracing::debug!(theme = %theme.name, "palette installed");
    } else {
        tracing::debug!(theme = %theme.name, "palette already installed, ignoring");
    }
    installed
}

/// Returns the installed palette, or [`Palette::DEFAULT`] if none was installed.
#[must_use]
pub fn palette() -> Palette {
    ACTIVE_PALETTE.get().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        for name in BUILTIN_THEMES {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn default_toml_matches_constant() {
        let theme = Theme::from_name("default").unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn unknown_theme_is_none() {
        assert!(Theme::from_name("solarized-plaid").is_none());
    }

    #[test]
    fn theme_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "name = \"custom\"\n[palette]\nheader = 1\naccent = 2\nhighlight = 3\nmuted = 4\n\
             match = 5\ninput_hint = 6\nselected_bg = 7\ndanger_bg = 8\n"
        )
        .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
        assert_eq!(theme.palette.match_fg, 5);
        assert_eq!(theme.palette.danger_bg, 8);
    }

    #[test]
    fn theme_file_with_out_of_range_color_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "name = \"bad\"\n[palette]\nheader = 300\naccent = 2\nhighlight = 3\nmuted = 4\n\
             match = 5\ninput_hint = 6\nselected_bg = 7\ndanger_bg = 8\n"
        )
        .unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, BetterS3Error::Theme(_)));
    }

    #[test]
    fn missing_theme_file_fails() {
        let err = Theme::from_file("/nonexistent/theme.toml").unwrap_err();
        assert!(err.to_string().contains("failed to read theme file"));
    }
}
