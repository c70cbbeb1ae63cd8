//! ANSI escape sequence builders and constants.
//!
//! These are the only "wire format" the UI layer speaks: SGR styling
//! (256-color foreground/background, bold, dim), cursor visibility and
//! positioning, alternate-screen switching and line/screen clearing. All
//! functions are pure and never consult [`ColorState`](crate::ui::text).

use std::fmt::Display;

/// Switches to the alternate screen buffer.
pub const ALT_SCREEN_ON: &str = "\u{1b}[?1049h";
/// Returns to the main screen buffer.
pub const ALT_SCREEN_OFF: &str = "\u{1b}[?1049l";
/// Hides the terminal cursor.
pub const HIDE: &str = "\u{1b}[?25l";
/// Shows the terminal cursor.
pub const SHOW: &str = "\u{1b}[?25h";
/// Clears all SGR attributes.
pub const RESET: &str = "\u{1b}[0m";
/// Clears from the cursor to the end of the line.
pub const CLEAR_EOL: &str = "\u{1b}[K";
/// Clears the whole screen.
pub const CLEAR_SCREEN: &str = "\u{1b}[2J";
/// Moves the cursor to the top-left corner.
pub const HOME: &str = "\u{1b}[H";

/// Turns bold on.
pub const BOLD_ON: &str = "\u{1b}[1m";
/// Turns dim on.
pub const DIM_ON: &str = "\u{1b}[2m";
/// Turns both bold and dim off.
pub const INTENSITY_OFF: &str = "\u{1b}[22m";
/// Restores the default foreground color.
pub const FG_DEFAULT: &str = "\u{1b}[39m";
/// Restores the default background color.
pub const BG_DEFAULT: &str = "\u{1b}[49m";

/// 256-color foreground: `ESC[38;5;{n}m`.
///
/// # Example
///
/// ```rust
/// use betters3tui::ui::ansi;
///
/// assert_eq!(ansi::fg(100), "\u{1b}[38;5;100m");
/// ```
#[must_use]
pub fn fg(n: u8) -> String {
    format!("\u{1b}[38;5;{n}m")
}

/// 256-color background: `ESC[48;5;{n}m`.
#[must_use]
pub fn bg(n: u8) -> String {
    format!("\u{1b}[48;5;{n}m")
}

/// Joins SGR parameters into one sequence: `sgr([1, 4])` is `ESC[1;4m`.
///
/// # Example
///
/// ```rust
/// use betters3tui::ui::ansi;
///
/// assert_eq!(ansi::sgr(["1", "38;5;100"]), "\u{1b}[1;38;5;100m");
/// ```
#[must_use]
pub fn sgr<I, T>(codes: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    let params: Vec<String> = codes.into_iter().map(|code| code.to_string()).collect();
    format!("\u{1b}[{}m", params.join(";"))
}

/// Moves the cursor to column `n` (1-indexed) of the current row.
#[must_use]
pub fn move_col(n: usize) -> String {
    format!("\u{1b}[{n}G")
}

/// Moves the cursor to `row`/`col` (both 1-indexed).
#[must_use]
pub fn move_to(row: usize, col: usize) -> String {
    format!("\u{1b}[{row};{col}H")
}
