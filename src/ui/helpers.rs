//! Shared rendering utilities and helpers.
//!
//! This module provides the small formatting pieces used across UI
//! components: fuzzy match highlighting, emoji glyph segments, human-readable
//! object sizes and timestamps, and the scroll window that keeps the selected
//! row visible.
//!
//! # Features
//!
//! - **Fuzzy Match Highlighting**: Styles exactly the matched character indices
//! - **UTF-8 Safe**: Operates on character indices, not byte indices
//! - **Fixed-Width Icons**: Emoji always occupy two columns
//!
//! # Example
//!
//! ```rust
//! use betters3tui::ui::helpers::{format_size, visible_window};
//!
//! assert_eq!(format_size(Some(1536)), "1.50 KB");
//! assert_eq!(visible_window(0, 100, 10), 0..10);
//! ```

use std::ops::Range;

use chrono::{DateTime, Utc};

use crate::ui::segment::{Segment, SegmentWriter, EMOJI_WIDTH};
use crate::ui::text::Style;

/// Icon for a bucket or key prefix.
pub const FOLDER_ICON: &str = "📁";
/// Icon for the prefix currently being browsed.
pub const OPEN_FOLDER_ICON: &str = "📂";
/// Icon for an object.
pub const FILE_ICON: &str = "📄";
/// Prefix drawn in front of the selected row.
pub const SELECTION_MARKER: &str = "→ ";

/// Cells in the download progress bar shown in the footer.
pub const PROGRESS_BAR_WIDTH: usize = 20;
/// Age in seconds (14 days) up to which timestamps render as relative times.
pub const RELATIVE_TIME_LIMIT_SECS: i64 = 14 * DAY;

const SIZE_UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const TIME_COLUMN_WIDTH: usize = 16;
const PROGRESS_FILLED: &str = "█";
const PROGRESS_EMPTY: &str = "░";

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Returns a glyph segment reserving [`EMOJI_WIDTH`] columns for `glyph`.
///
/// # Example
///
/// ```rust
/// use betters3tui::ui::helpers::emoji;
///
/// assert_eq!(emoji("📁").content_width(), 2);
/// ```
#[must_use]
pub fn emoji(glyph: &str) -> Segment {
    Segment::Glyph {
        text: glyph.to_string(),
        width: EMOJI_WIDTH,
    }
}

/// Renders `text` with the characters at `positions` in the match style.
///
/// Adjacent matched characters share one styled run. Positions are character
/// indices; out-of-range positions are ignored.
#[must_use]
pub fn highlight_matches(text: &str, positions: &[usize]) -> String {
    let mut writer = SegmentWriter::new();
    write_highlighted(&mut writer, text, positions);
    writer.render(0)
}

/// Appends `text` to `writer`, styling the characters at `positions`.
///
/// Used instead of [`highlight_matches`] when the result must stay measurable
/// by a [`Line`](crate::ui::Line).
pub fn write_highlighted(writer: &mut SegmentWriter, text: &str, positions: &[usize]) {
    if positions.is_empty() {
        writer.write(text);
        return;
    }

    let mut sorted = positions.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut run = String::new();
    let mut run_matched = false;
    for (idx, c) in text.chars().enumerate() {
        let matched = sorted.binary_search(&idx).is_ok();
        if matched != run_matched && !run.is_empty() {
            flush_run(writer, &mut run, run_matched);
        }
        run_matched = matched;
        run.push(c);
    }
    if !run.is_empty() {
        flush_run(writer, &mut run, run_matched);
    }
}

fn flush_run(writer: &mut SegmentWriter, run: &mut String, matched: bool) {
    let style = if matched { Style::Match } else { Style::Plain };
    writer.write_styled(std::mem::take(run), style);
}

/// Formats an object size for display.
///
/// Missing and zero sizes render as `-`; sizes below one KiB as `N B`;
/// everything else with two decimals in the largest fitting binary unit.
///
/// # Example
///
/// ```rust
/// use betters3tui::ui::helpers::format_size;
///
/// assert_eq!(format_size(None), "-");
/// assert_eq!(format_size(Some(512)), "512 B");
/// assert_eq!(format_size(Some(5 * 1024 * 1024)), "5.00 MB");
/// ```
#[must_use]
pub fn format_size(bytes: Option<u64>) -> String {
    let bytes = match bytes {
        None | Some(0) => return "-".to_string(),
        Some(b) => b,
    };
    if bytes < 1024 {
        return format!("{bytes} B");
    }

    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", SIZE_UNITS[unit])
}

/// Formats a last-modified timestamp relative to the current time.
///
/// See [`format_time_at`].
#[must_use]
pub fn format_time(time: Option<DateTime<Utc>>) -> String {
    format_time_at(time, Utc::now())
}

/// Formats a last-modified timestamp as seen at `now`.
///
/// Times up to [`RELATIVE_TIME_LIMIT_SECS`] old render as `Ns ago`, `Nm ago`,
/// `Nh ago` or `Nd ago`, right-aligned to the width of the absolute format so
/// the column lines up. Older times render as `YYYY-MM-DD HH:MM`. Times in the
/// future count as `0s ago`.
///
/// # Example
///
/// ```rust
/// use betters3tui::ui::helpers::format_time_at;
/// use chrono::{TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap();
/// let earlier = Utc.with_ymd_and_hms(2024, 5, 15, 9, 30, 0).unwrap();
/// assert_eq!(format_time_at(Some(earlier), now), "          2h ago");
/// assert_eq!(format_time_at(None, now), "-");
/// ```
#[must_use]
pub fn format_time_at(time: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(time) = time else {
        return "-".to_string();
    };
    let secs = now.signed_duration_since(time).num_seconds().max(0);
    if secs > RELATIVE_TIME_LIMIT_SECS {
        return time.format(TIME_FORMAT).to_string();
    }

    let relative = match secs {
        s if s < MINUTE => format!("{s}s ago"),
        s if s < HOUR => format!("{}m ago", s / MINUTE),
        s if s < DAY => format!("{}h ago", s / HOUR),
        s => format!("{}d ago", s / DAY),
    };
    format!("{relative:>width$}", width = TIME_COLUMN_WIDTH)
}

/// Formats download progress as `[█████░░░░░] 50.0% (1.00 MB/2.00 MB)`.
///
/// The percentage is rounded to one decimal and the bar is filled in whole
/// cells. A zero `total` counts as complete.
///
/// # Example
///
/// ```rust
/// use betters3tui::ui::helpers::format_progress;
///
/// assert_eq!(format_progress(512, 2048, 4), "[█░░░] 25.0% (512 B/2.00 KB)");
/// ```
#[must_use]
pub fn format_progress(downloaded: u64, total: u64, bar_width: usize) -> String {
    #[allow(clippy::cast_precision_loss)]
    let percent = if total == 0 {
        100.0
    } else {
        let ratio = (downloaded as f64 / total as f64).min(1.0);
        (ratio * 1000.0).round() / 10.0
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((percent / 100.0 * bar_width as f64) as usize).min(bar_width);

    format!(
        "[{}{}] {percent:.1}% ({}/{})",
        PROGRESS_FILLED.repeat(filled),
        PROGRESS_EMPTY.repeat(bar_width - filled),
        format_size(Some(downloaded)),
        format_size(Some(total)),
    )
}

/// Computes which rows of a `total`-row list to show in `rows` lines.
///
/// The window is centered on `selected` and shifted back when it would run
/// past the end, so the visible area stays full whenever enough rows exist.
#[must_use]
pub fn visible_window(selected: usize, total: usize, rows: usize) -> Range<usize> {
    let mut start = selected.saturating_sub(rows / 2);
    let end = (start + rows).min(total);
    if end.saturating_sub(start) < rows {
        start = end.saturating_sub(rows);
    }
    start.min(end)..end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::text;
    use chrono::TimeZone;

    #[test]
    fn sizes() {
        assert_eq!(format_size(None), "-");
        assert_eq!(format_size(Some(0)), "-");
        assert_eq!(format_size(Some(1)), "1 B");
        assert_eq!(format_size(Some(1023)), "1023 B");
        assert_eq!(format_size(Some(1024)), "1.00 KB");
        assert_eq!(format_size(Some(1536)), "1.50 KB");
        assert_eq!(format_size(Some(3 * 1024 * 1024 * 1024)), "3.00 GB");
        assert_eq!(format_size(Some(2 * 1024_u64.pow(5))), "2048.00 TB");
    }

    #[test]
    fn times() {
        let t = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 59).unwrap();
        assert_eq!(format_time(Some(t)), "2024-03-09 14:05");
        assert_eq!(format_time(None), "-");
    }

    #[test]
    fn relative_time_boundaries() {
        let now = Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap();
        let ago = |secs: i64| format_time_at(Some(now - chrono::TimeDelta::seconds(secs)), now);

        assert_eq!(ago(0), "          0s ago");
        assert_eq!(ago(59), "         59s ago");
        assert_eq!(ago(60), "          1m ago");
        assert_eq!(ago(HOUR - 1), "         59m ago");
        assert_eq!(ago(HOUR), "          1h ago");
        assert_eq!(ago(DAY - 1), "         23h ago");
        assert_eq!(ago(DAY), "          1d ago");
        assert_eq!(ago(RELATIVE_TIME_LIMIT_SECS), "         14d ago");
        assert_eq!(ago(RELATIVE_TIME_LIMIT_SECS + 1), "2024-05-01 11:59");
        assert_eq!(ago(-30), "          0s ago");
        assert!((0..100_000).step_by(997).all(|s| ago(s).chars().count() == 16));
    }

    #[test]
    fn progress_bar() {
        assert_eq!(
            format_progress(1024 * 1024, 2 * 1024 * 1024, 10),
            "[█████░░░░░] 50.0% (1.00 MB/2.00 MB)"
        );
        assert_eq!(format_progress(1, 3, 4), "[█░░░] 33.3% (1 B/3 B)");
        assert_eq!(format_progress(0, 100, 4), "[░░░░] 0.0% (-/100 B)");
        assert_eq!(format_progress(100, 100, 4), "[████] 100.0% (100 B/100 B)");
        assert_eq!(format_progress(150, 100, 4), "[████] 100.0% (150 B/100 B)");
        assert_eq!(format_progress(0, 0, 2), "[██] 100.0% (-/-)");
        let bar = format_progress(7, 9, PROGRESS_BAR_WIDTH);
        assert_eq!(bar.chars().filter(|c| matches!(c, '█' | '░')).count(), PROGRESS_BAR_WIDTH);
    }

    #[test]
    fn emoji_is_two_columns_wide() {
        assert_eq!(emoji(FOLDER_ICON).content_width(), 2);
        assert_eq!(emoji(FILE_ICON).content_width(), 2);
    }

    #[test]
    fn highlight_styles_exact_positions() {
        let _guard = text::test_guard();
        let out = highlight_matches("test-file", &[0, 1, 5]);
        let expected = format!("{}st-{}ile", text::matched("te"), text::matched("f"));
        assert_eq!(out, expected);
    }

    #[test]
    fn highlight_without_positions_or_colors_is_plain() {
        let _guard = text::test_guard();
        assert_eq!(highlight_matches("abc", &[]), "abc");
        text::disable_colors();
        let out = highlight_matches("abc", &[1]);
        text::enable_colors();
        assert_eq!(out, "abc");
    }

    #[test]
    fn window_centers_on_selection() {
        assert_eq!(visible_window(50, 100, 10), 45..55);
        assert_eq!(visible_window(2, 100, 10), 0..10);
        assert_eq!(visible_window(98, 100, 10), 90..100);
    }

    #[test]
    fn window_with_fewer_rows_than_space() {
        assert_eq!(visible_window(3, 5, 10), 0..5);
        assert_eq!(visible_window(0, 0, 10), 0..0);
        assert_eq!(visible_window(0, 5, 0), 0..0);
    }
}
