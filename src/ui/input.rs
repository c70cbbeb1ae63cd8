//! Single-line editable text value with a visible cursor.
//!
//! The field renders three parts: the text before the cursor, the character
//! under the cursor in the highlight style (or a `_` filler when the cursor
//! sits past the last character), and the text after it. An empty value shows
//! the placeholder in the muted style instead.
//!
//! Cursor positions are character indices, not bytes. The field does no
//! terminal I/O; callers place it in a [`Line`](crate::ui::Line) and mark the
//! line with [`InputField::cursor_column`].

use std::fmt;

use crate::ui::metrics;
use crate::ui::segment::SegmentWriter;

/// Glyph drawn when the cursor sits at the end of the text.
pub const CURSOR_FILLER: &str = "_";

/// Editable text value plus cursor position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    placeholder: String,
    text: String,
    cursor: usize,
}

impl InputField {
    /// Creates a field. A missing cursor defaults to the end of `text`; any
    /// cursor past the end is clamped to it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use betters3tui::ui::InputField;
    ///
    /// assert_eq!(InputField::new("Search...", "ab", Some(10)).cursor(), 2);
    /// assert_eq!(InputField::new("Search...", "abc", None).cursor(), 3);
    /// ```
    #[must_use]
    pub fn new(placeholder: impl Into<String>, text: impl Into<String>, cursor: Option<usize>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            placeholder: placeholder.into(),
            cursor: cursor.unwrap_or(len).min(len),
            text,
        }
    }

    /// Placeholder shown while the value is empty.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Current value.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters, always within `0..=text.chars().count()`.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display column of the cursor relative to the start of the field.
    #[must_use]
    pub fn cursor_column(&self) -> usize {
        let before: String = self.text.chars().take(self.cursor).collect();
        metrics::visible_width(&before)
    }

    /// Appends the field's segments to `writer`.
    pub fn write_to(&self, writer: &mut SegmentWriter) {
        if self.text.is_empty() {
            if self.placeholder.is_empty() {
                writer.write_highlight(CURSOR_FILLER);
            } else {
                writer.write_muted(self.placeholder.as_str());
            }
            return;
        }

        let mut chars = self.text.chars();
        let before: String = chars.by_ref().take(self.cursor).collect();
        let at = chars.next();
        let after: String = chars.collect();

        if !before.is_empty() {
            writer.write(before);
        }
        match at {
            Some(c) => writer.write_highlight(c.to_string()),
            None => writer.write_highlight(CURSOR_FILLER),
        };
        if !after.is_empty() {
            writer.write(after);
        }
    }

    /// Renders the field to a styled string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut writer = SegmentWriter::new();
        self.write_to(&mut writer);
        writer.render(writer.content_width())
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
