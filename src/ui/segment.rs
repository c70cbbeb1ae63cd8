//! Ordered buffers of styled fragments.
//!
//! A [`SegmentWriter`] accumulates text spans, fixed-width glyphs and fill
//! markers in call order and renders them to a string of a requested visible
//! width. Styles are applied at render time, so the color state in effect when
//! the frame is rendered is the one that counts.
//!
//! # Fill Distribution
//!
//! Fill markers consume whatever width the other segments leave over. With a
//! single marker it gets everything; with several the leftover is split
//! evenly, earlier markers taking the remainder one column at a time. When
//! content already exceeds the requested width, fills render empty and the
//! content is left untouched; truncation is the job of the
//! [`Line`](crate::ui::Line).
//!
//! # Example
//!
//! ```rust
//! use betters3tui::ui::SegmentWriter;
//!
//! let mut writer = SegmentWriter::new();
//! writer.write("[").fill('=').write("]");
//! assert_eq!(writer.render(6), "[====]");
//! ```

use crate::ui::metrics;
use crate::ui::text::Style;

/// Width reserved for emoji glyphs regardless of how they measure.
pub const EMOJI_WIDTH: usize = 2;

/// One fragment of a [`SegmentWriter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Styled text measured by its visible width.
    Text {
        /// Raw text, possibly containing pre-styled escape sequences.
        text: String,
        /// Style applied around the text at render time.
        style: Style,
    },
    /// Expands to consume leftover width at render time.
    Fill {
        /// Character repeated to fill the space.
        ch: char,
        /// Style applied around the whole fill run.
        style: Style,
    },
    /// Text that always occupies at least `width` columns.
    ///
    /// Used for emoji whose measured width varies between terminals; narrower
    /// renderings are padded with spaces.
    Glyph {
        /// Glyph text.
        text: String,
        /// Columns the glyph occupies.
        width: usize,
    },
}

impl Segment {
    /// Visible width contributed before fill distribution.
    #[must_use]
    pub fn content_width(&self) -> usize {
        match self {
            Self::Text { text, .. } => metrics::visible_width(text),
            Self::Fill { .. } => 0,
            Self::Glyph { text, width } => metrics::visible_width(text).max(*width),
        }
    }
}

/// Ordered, append-only buffer of styled fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentWriter {
    segments: Vec<Segment>,
}

impl SegmentWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends unstyled text.
    pub fn write(&mut self, text: impl Into<String>) -> &mut Self {
        self.write_styled(text, Style::Plain)
    }

    /// Appends text with an explicit style.
    pub fn write_styled(&mut self, text: impl Into<String>, style: Style) -> &mut Self {
        self.push(Segment::Text {
            text: text.into(),
            style,
        })
    }

    /// Appends a prebuilt segment.
    pub fn push(&mut self, segment: Segment) -> &mut Self {
        self.segments.push(segment);
        self
    }

    /// Appends bold text.
    pub fn write_bold(&mut self, text: impl Into<String>) -> &mut Self {
        self.write_styled(text, Style::Bold)
    }

    /// Appends dimmed text.
    pub fn write_dim(&mut self, text: impl Into<String>) -> &mut Self {
        self.write_styled(text, Style::Dim)
    }

    /// Appends text in the highlight color.
    pub fn write_highlight(&mut self, text: impl Into<String>) -> &mut Self {
        self.write_styled(text, Style::Highlight)
    }

    /// Appends text in the accent color.
    pub fn write_accent(&mut self, text: impl Into<String>) -> &mut Self {
        self.write_styled(text, Style::Accent)
    }

    /// Appends text in the muted color.
    pub fn write_muted(&mut self, text: impl Into<String>) -> &mut Self {
        self.write_styled(text, Style::Muted)
    }

    /// Appends a glyph occupying exactly `width` columns.
    pub fn glyph(&mut self, text: impl Into<String>, width: usize) -> &mut Self {
        self.push(Segment::Glyph {
            text: text.into(),
            width,
        })
    }

    /// Appends an emoji normalized to [`EMOJI_WIDTH`] columns.
    pub fn emoji(&mut self, text: impl Into<String>) -> &mut Self {
        self.glyph(text, EMOJI_WIDTH)
    }

    /// Appends an unstyled fill marker.
    pub fn fill(&mut self, ch: char) -> &mut Self {
        self.fill_styled(ch, Style::Plain)
    }

    /// Appends a styled fill marker.
    pub fn fill_styled(&mut self, ch: char, style: Style) -> &mut Self {
        self.push(Segment::Fill { ch, style })
    }

    /// Returns `true` if nothing has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns `true` if at least one fill marker was appended.
    #[must_use]
    pub fn has_fill(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::Fill { .. }))
    }

    /// Sum of the visible widths of all non-fill segments.
    #[must_use]
    pub fn content_width(&self) -> usize {
        self.segments.iter().map(Segment::content_width).sum()
    }

    /// Renders the segments, expanding fill markers to reach `width` columns.
    #[must_use]
    pub fn render(&self, width: usize) -> String {
        let fills = self
            .segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Fill { .. }))
            .count();
        let leftover = width.saturating_sub(self.content_width());
        let (share, extra) = if fills == 0 {
            (0, 0)
        } else {
            (leftover / fills, leftover % fills)
        };

        let mut out = String::new();
        let mut fill_idx = 0;
        for segment in &self.segments {
            match segment {
                Segment::Text { text, style } => out.push_str(&style.apply(text)),
                Segment::Fill { ch, style } => {
                    let columns = share + usize::from(fill_idx < extra);
                    fill_idx += 1;
                    if columns > 0 {
                        out.push_str(&style.apply(&fill_run(*ch, columns)));
                    }
                }
                Segment::Glyph { text, width } => {
                    out.push_str(text);
                    let measured = metrics::visible_width(text);
                    out.extend(std::iter::repeat(' ').take(width.saturating_sub(measured)));
                }
            }
        }
        out
    }
}

/// Repeats `ch` to cover `columns`, padding with spaces when a wide fill
/// character does not divide the run evenly. Zero-width characters fill with
/// spaces.
fn fill_run(ch: char, columns: usize) -> String {
    let (ch, ch_width) = match metrics::char_width(ch) {
        0 => (' ', 1),
        w => (ch, w),
    };
    let mut run: String = std::iter::repeat(ch).take(columns / ch_width).collect();
    run.extend(std::iter::repeat(' ').take(columns % ch_width));
    run
}
