//! One full-width terminal row built from three segment writers.
//!
//! # Layout
//!
//! ```text
//! |left ........ center ........ right|
//! ```
//!
//! - `left` starts at column 0.
//! - `right` ends at the last column.
//! - `center` is centered in the space left between them.
//!
//! When left and right together are wider than the row, right gives way first
//! (truncated from the start, so the tail of sizes/timestamps/paths stays
//! visible) and then left is truncated from the end. A rendered row never
//! exceeds the requested width.
//!
//! Fill markers claim the spare columns: a fill in `left` wins over one in
//! `right`, which wins over one in `center`.
//!
//! # Background
//!
//! A background color spans the whole padded row regardless of content
//! length, which is how selection bars are drawn. Resets embedded in the
//! content re-apply the background so it never breaks mid-row.

use crate::ui::ansi;
use crate::ui::metrics;
use crate::ui::segment::SegmentWriter;
use crate::ui::text;

/// A single row: left, center and right writers plus row-level decoration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    left: SegmentWriter,
    center: SegmentWriter,
    right: SegmentWriter,
    background: Option<u8>,
    input_column: Option<usize>,
}

impl Line {
    /// Creates an empty line without background.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty line with an optional 256-color background.
    #[must_use]
    pub fn with_background(background: Option<u8>) -> Self {
        let mut line = Self::default();
        line.set_background(background);
        line
    }

    /// Left-aligned writer.
    pub fn left(&mut self) -> &mut SegmentWriter {
        &mut self.left
    }

    /// Centered writer.
    pub fn center(&mut self) -> &mut SegmentWriter {
        &mut self.center
    }

    /// Right-aligned writer.
    pub fn right(&mut self) -> &mut SegmentWriter {
        &mut self.right
    }

    /// Row background, if any.
    #[must_use]
    pub const fn background(&self) -> Option<u8> {
        self.background
    }

    /// Sets or clears the row background.
    pub fn set_background(&mut self, background: Option<u8>) {
        self.background = background;
    }

    /// Records that this line owns the terminal cursor at `column` (0-based).
    ///
    /// Uniqueness across a frame is enforced by [`Screen`](crate::ui::Screen).
    pub fn mark_has_input(&mut self, column: usize) {
        self.input_column = Some(column);
    }

    /// Returns `true` if this line owns the terminal cursor.
    #[must_use]
    pub const fn has_input(&self) -> bool {
        self.input_column.is_some()
    }

    /// Cursor column recorded by [`Line::mark_has_input`].
    #[must_use]
    pub const fn input_column(&self) -> Option<usize> {
        self.input_column
    }

    /// Renders the row at exactly `width` columns (or less, when the row has
    /// neither background nor right-aligned content and trailing padding is
    /// left to the end-of-line clear).
    #[must_use]
    pub fn render(&self, width: usize) -> String {
        let left_natural = self.left.content_width();
        let right_natural = self.right.content_width();

        let right_width = right_natural.min(width.saturating_sub(left_natural));
        let left_width = left_natural.min(width);
        let middle = width - left_width - right_width;

        let center_width = self.center.content_width().min(middle);
        let spare = middle - center_width;

        let (left_target, center_target, right_target, gap) = if self.left.has_fill() {
            (left_width + spare, center_width, right_width, 0)
        } else if self.right.has_fill() {
            (left_width, center_width, right_width + spare, 0)
        } else if self.center.has_fill() {
            (left_width, center_width + spare, right_width, 0)
        } else {
            (left_width, center_width, right_width, spare)
        };

        let left = fit_end(self.left.render(left_target), left_target);
        let center = fit_end(self.center.render(center_target), center_target);
        let right = fit_start(self.right.render(right_target), right_target);

        let (gap_before, gap_after) = if self.center.is_empty() {
            (gap, 0)
        } else {
            (gap / 2, gap - gap / 2)
        };

        let mut row = String::with_capacity(left.len() + center.len() + right.len() + gap);
        row.push_str(&left);
        let pad_tail = self.background.is_some() || !right.is_empty();
        if center.is_empty() && !pad_tail {
            // Nothing after the left segment; the end-of-line clear handles it.
        } else {
            push_spaces(&mut row, gap_before);
            row.push_str(&center);
            if pad_tail {
                push_spaces(&mut row, gap_after);
                row.push_str(&right);
            }
        }

        match self.background {
            Some(bg) if text::colors_enabled() => paint_background(&row, bg),
            _ => row,
        }
    }
}

fn fit_end(rendered: String, width: usize) -> String {
    if metrics::visible_width(&rendered) > width {
        metrics::truncate(&rendered, width)
    } else {
        rendered
    }
}

fn fit_start(rendered: String, width: usize) -> String {
    if metrics::visible_width(&rendered) > width {
        metrics::truncate_from_start(&rendered, width)
    } else {
        rendered
    }
}

fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat(' ').take(count));
}

fn paint_background(row: &str, bg: u8) -> String {
    let bg_code = ansi::bg(bg);
    let reapplied = format!("{}{bg_code}", ansi::RESET);
    let body = row
        .replace(ansi::RESET, &reapplied)
        .replace(ansi::BG_DEFAULT, &bg_code);
    format!("{bg_code}{body}{}", ansi::BG_DEFAULT)
}
