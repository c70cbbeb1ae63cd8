//! betters3tui: the rendering and search core of a terminal S3 browser.
//!
//! The browser lets a user pick a credential profile, walk buckets and key
//! prefixes, search entries and download objects. This crate holds the parts
//! with real algorithmic content:
//! - A text-mode UI composition engine: Unicode-aware width measurement,
//!   ANSI-safe truncation, three-way line layout and frame assembly
//! - A fuzzy ranking engine: scored subsequence matching with deterministic
//!   tie-breaking and exact match positions for highlighting

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Preview binary (main.rs)                           │  ← CLI entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌──────────────────────────────┐   ┌──────────────────┐
//! │ UI Layer (ui/)               │   │ Search (search/) │
//! │ - Metrics, ANSI, styles      │   │ - Candidate      │
//! │ - Segments, lines, screens   │   │   normalization  │
//! │ - Components, renderer       │   │ - Fuzzy ranking  │
//! └──────────────────────────────┘   └──────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber, rotating log file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`ui`]: Frame composition and rendering
//! - [`search`]: Fuzzy indexing and ranking
//! - [`domain`]: Error types
//! - [`infrastructure`]: Platform paths
//! - [`observability`]: Logging setup
//!
//! # Configuration
//!
//! Optional TOML file at `~/.config/betters3tui/config.toml`:
//!
//! ```toml
//! theme = "high-contrast"        # or theme_file = "~/my-theme.toml"
//! colors = true
//! trace_level = "debug"
//! ```
//!
//! The `NO_COLOR` environment variable disables colors regardless of the file.
//!
//! # Example
//!
//! ```rust
//! use betters3tui::search::Fuzzy;
//! use betters3tui::ui::{helpers, Screen};
//!
//! let fuzzy = Fuzzy::new(vec!["test-file", "another-file", "README.md"])?;
//! let mut screen = Screen::new(40, 5);
//! for m in fuzzy.match_query("file").limit(3) {
//!     let line = screen.body.add_line();
//!     helpers::write_highlighted(line.left(), m.entry.text(), &m.positions);
//! }
//! assert_eq!(screen.rows()?.len(), 5);
//! # Ok::<(), betters3tui::BetterS3Error>(())
//! ```

pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod search;
pub mod ui;

pub use domain::{BetterS3Error, Result};
pub use search::{Candidate, Fuzzy, Match};
pub use ui::{InputField, Line, Screen, Section, SegmentWriter, Theme};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::path::Path;

use crate::infrastructure::paths;
use crate::ui::{text, theme};

/// Runtime configuration.
///
/// # Example
///
/// ```toml
/// theme = "monochrome"
/// theme_file = "/path/to/theme.toml"
/// colors = false
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Built-in theme name to use.
    ///
    /// Options: `default`, `high-contrast`, `monochrome`. Ignored if
    /// `theme_file` is set.
    #[serde(rename = "theme", alias = "theme_name")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file (`~` is expanded).
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Whether styled output is enabled. Default: `true`
    pub colors: bool,

    /// Tracing level for the log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            colors: true,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a flat key/value map.
    ///
    /// # Parsing Rules
    ///
    /// - `theme`: String → `Option<String>`
    /// - `theme_file`: String → `Option<String>`
    /// - `colors`: `true/false/yes/no/on/off/1/0` → `bool` (falls back to `true`)
    /// - `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use betters3tui::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "monochrome".to_string());
    /// map.insert("colors".to_string(), "no".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("monochrome"));
    /// assert!(!config.colors);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let colors = config
            .get("colors")
            .and_then(|s| parse_bool(s))
            .unwrap_or(true);

        Self {
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            colors,
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Parses a TOML document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BetterS3Error::Config`] if the document is not valid TOML or
    /// a value has the wrong type.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| BetterS3Error::Config(format!("failed to parse config TOML: {e}")))
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BetterS3Error::Io`] if the file cannot be read and
    /// [`BetterS3Error::Config`] if it cannot be parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Loads `~/.config/betters3tui/config.toml`, or defaults if it is absent.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] for a file that exists.
    pub fn load_default() -> Result<Self> {
        match paths::config_file() {
            Some(path) if path.exists() => Self::load(path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies environment overrides: a non-empty `NO_COLOR` disables colors.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_no_color(std::env::var_os("NO_COLOR"))
    }

    fn with_no_color(mut self, no_color: Option<OsString>) -> Self {
        if no_color.is_some_and(|value| !value.is_empty()) {
            self.colors = false;
        }
        self
    }

    /// Resolves the theme: file, then name, then the default.
    ///
    /// Failures fall back to the default theme and are logged at debug level.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || {
                self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                Theme::from_file(paths::expand_tilde(theme_file)).unwrap_or_else(|e| {
                    tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                    Theme::default()
                })
            },
        )
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Applies `config` to the process: color state and palette.
///
/// The palette can be installed once per process; later calls still update
/// the color state and return the resolved theme.
///
/// # Example
///
/// ```rust
/// use betters3tui::{initialize, Config};
///
/// let theme = initialize(&Config::default());
/// assert_eq!(theme.name, "default");
/// ```
pub fn initialize(config: &Config) -> Theme {
    tracing::debug!(colors = config.colors, "initializing betters3tui");

    text::set_colors_enabled(config.colors);
    let theme = config.resolve_theme();
    theme::install(&theme);
    theme
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn map_parsing_with_fallbacks() {
        let mut map = BTreeMap::new();
        map.insert("colors".to_string(), "maybe".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());
        let config = Config::from_map(&map);
        assert!(config.colors);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert!(config.theme_name.is_none());
    }

    #[test]
    fn toml_parsing() {
        let config = Config::from_toml_str("theme = \"monochrome\"\ncolors = false\n").unwrap();
        assert_eq!(config.theme_name.as_deref(), Some("monochrome"));
        assert!(!config.colors);

        let aliased = Config::from_toml_str("theme_name = \"default\"").unwrap();
        assert_eq!(aliased.theme_name.as_deref(), Some("default"));

        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = Config::from_toml_str("colors = \"sometimes\"").unwrap_err();
        assert!(matches!(err, BetterS3Error::Config(_)));
    }

    #[test]
    fn load_reads_file_and_reports_missing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "trace_level = \"warn\"").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.trace_level.as_deref(), Some("warn"));

        let err = Config::load("/nonexistent/betters3tui.toml").unwrap_err();
        assert!(matches!(err, BetterS3Error::Io(_)));
    }

    #[test]
    fn no_color_override() {
        let config = Config::default();
        assert!(config.clone().with_no_color(None).colors);
        assert!(config.clone().with_no_color(Some(OsString::new())).colors);
        assert!(!config.with_no_color(Some(OsString::from("1"))).colors);
    }

    #[test]
    fn theme_resolution_order() {
        let by_name = Config {
            theme_name: Some("monochrome".to_string()),
            ..Config::default()
        };
        assert_eq!(by_name.resolve_theme().name, "monochrome");

        let unknown = Config {
            theme_name: Some("nope".to_string()),
            ..Config::default()
        };
        assert_eq!(unknown.resolve_theme(), Theme::default());

        let bad_file = Config {
            theme_name: Some("monochrome".to_string()),
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Config::default()
        };
        assert_eq!(bad_file.resolve_theme(), Theme::default());
    }
}
