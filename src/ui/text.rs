//! Process-wide color toggle and semantic text styles.
//!
//! # Color State
//!
//! Color output is controlled by one explicit global flag. It starts enabled
//! when the process starts, changes only through [`enable_colors`],
//! [`disable_colors`] and [`set_colors_enabled`], and is read fresh by every
//! style call. Toggling it mid-session changes the very next styled string;
//! nothing caches a styled form.
//!
//! # Styles
//!
//! Styles wrap text in an SGR "on" code and the matching "off" code (22 for
//! bold/dim, 39 for foreground colors, 49 for backgrounds) instead of a full
//! reset, so a styled fragment inside a highlighted row does not clear the row
//! background. Foreground colors come from the installed
//! [`Palette`](crate::ui::theme::Palette).
//!
//! # Example
//!
//! ```rust
//! use betters3tui::ui::text;
//!
//! text::disable_colors();
//! assert_eq!(text::bold("plain"), "plain");
//! text::enable_colors();
//! assert_eq!(text::bold("loud"), "\u{1b}[1mloud\u{1b}[22m");
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use crate::ui::ansi;
use crate::ui::theme;

static COLORS_ENABLED: AtomicBool = AtomicBool::new(true);

/// Returns whether styled output is currently enabled.
#[must_use]
pub fn colors_enabled() -> bool {
    COLORS_ENABLED.load(Ordering::Relaxed)
}

/// Enables styled output.
pub fn enable_colors() {
    set_colors_enabled(true);
}

/// Disables styled output; style functions return their input unchanged.
pub fn disable_colors() {
    set_colors_enabled(false);
}

/// Sets the color flag explicitly.
pub fn set_colors_enabled(enabled: bool) {
    let previous = COLORS_ENABLED.swap(enabled, Ordering::Relaxed);
    if previous != enabled {
        tracing::debug!(enabled, "color output toggled");
    }
}

/// Visual style of a text fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// No styling.
    #[default]
    Plain,
    /// Bold weight.
    Bold,
    /// Dimmed (faint) weight.
    Dim,
    /// Palette highlight color.
    Highlight,
    /// Palette accent color, used for errors and destructive actions.
    Accent,
    /// Palette muted color, used for placeholders and hints.
    Muted,
    /// Fuzzy-match highlight (bold + palette match color).
    Match,
    /// Bold palette header color.
    Header,
    /// Palette input-hint color.
    Hint,
    /// Custom 256-color background.
    Background(u8),
}

impl Style {
    /// Wraps `s` in this style, honoring the current color state.
    #[must_use]
    pub fn apply(self, s: &str) -> String {
        match self {
            Self::Plain => s.to_string(),
            Self::Bold => bold(s),
            Self::Dim => dim(s),
            Self::Highlight => highlight(s),
            Self::Accent => accent(s),
            Self::Muted => muted(s),
            Self::Match => matched(s),
            Self::Header => header(s),
            Self::Hint => hint(s),
            Self::Background(n) => background(s, n),
        }
    }
}

fn wrap(s: &str, on: &str, off: &str) -> String {
    if !colors_enabled() {
        return s.to_string();
    }
    let mut out = String::with_capacity(on.len() + s.len() + off.len());
    out.push_str(on);
    out.push_str(s);
    out.push_str(off);
    out
}

/// Bold text.
#[must_use]
pub fn bold(s: &str) -> String {
    wrap(s, ansi::BOLD_ON, ansi::INTENSITY_OFF)
}

/// Dimmed text.
#[must_use]
pub fn dim(s: &str) -> String {
    wrap(s, ansi::DIM_ON, ansi::INTENSITY_OFF)
}

/// Text in the palette highlight color.
#[must_use]
pub fn highlight(s: &str) -> String {
    wrap(s, &ansi::fg(theme::palette().highlight), ansi::FG_DEFAULT)
}

/// Text in the palette accent color.
#[must_use]
pub fn accent(s: &str) -> String {
    wrap(s, &ansi::fg(theme::palette().accent), ansi::FG_DEFAULT)
}

/// Text in the palette muted color.
#[must_use]
pub fn muted(s: &str) -> String {
    wrap(s, &ansi::fg(theme::palette().muted), ansi::FG_DEFAULT)
}

/// Fuzzy-match highlight: bold plus the palette match color.
#[must_use]
pub fn matched(s: &str) -> String {
    let on = format!("{}{}", ansi::BOLD_ON, ansi::fg(theme::palette().match_fg));
    let off = format!("{}{}", ansi::FG_DEFAULT, ansi::INTENSITY_OFF);
    wrap(s, &on, &off)
}

/// Title text: bold plus the palette header color.
#[must_use]
pub fn header(s: &str) -> String {
    let on = format!("{}{}", ansi::BOLD_ON, ansi::fg(theme::palette().header));
    let off = format!("{}{}", ansi::FG_DEFAULT, ansi::INTENSITY_OFF);
    wrap(s, &on, &off)
}

/// Text in the palette input-hint color.
#[must_use]
pub fn hint(s: &str) -> String {
    wrap(s, &ansi::fg(theme::palette().input_hint), ansi::FG_DEFAULT)
}

/// Text on a 256-color background.
#[must_use]
pub fn background(s: &str, n: u8) -> String {
    wrap(s, &ansi::bg(n), ansi::BG_DEFAULT)
}

/// Serializes tests that flip the global color flag.
#[cfg(test)]
pub(crate) fn test_guard() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}
