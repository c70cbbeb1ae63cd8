//! Display-width measurement and width-bounded truncation.
//!
//! Every layout decision in the UI layer flows through this module. Widths are
//! measured in terminal columns: escape sequences contribute nothing, and each
//! remaining codepoint is classified as zero, narrow (1) or wide (2) columns.
//!
//! # Classification
//!
//! - **Zero**: combining marks, variation selectors, zero-width space/joiners
//! - **Wide**: East Asian wide/fullwidth characters and emoji presentation
//!   codepoints
//! - **Narrow**: everything else, including codepoints `unicode-width` does not
//!   know about (fail-soft fallback, never an error)
//!
//! # Truncation
//!
//! [`truncate`] and [`truncate_from_start`] produce a string of exactly the
//! requested width whenever the input is wider and `max_width >= 1`. A wide
//! character straddling the cut point is replaced by a space. When
//! `max_width` is `0` the result is the empty string.
//!
//! # Example
//!
//! ```rust
//! use betters3tui::ui::metrics;
//!
//! assert_eq!(metrics::visible_width("\u{1b}[1mhello\u{1b}[0m"), 5);
//! assert_eq!(metrics::truncate("hello world", 8), "hello w…");
//! assert_eq!(metrics::truncate_from_start("a/long/path", 6), "…/path");
//! ```

use unicode_width::UnicodeWidthChar;

use crate::ui::ansi;

/// Marker appended (or prepended) to truncated text.
pub const ELLIPSIS: &str = "…";

/// Column width of [`ELLIPSIS`].
pub const ELLIPSIS_WIDTH: usize = 1;

/// Glyph-width class of a single codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphWidth {
    /// Occupies no column (combining marks, selectors, joiners).
    Zero,
    /// Occupies one column.
    Narrow,
    /// Occupies two columns (CJK, emoji).
    Wide,
}

impl GlyphWidth {
    /// Classifies a character.
    #[must_use]
    pub fn of(c: char) -> Self {
        if is_zero_width(c) {
            Self::Zero
        } else if is_wide(c) {
            Self::Wide
        } else {
            Self::Narrow
        }
    }

    /// Number of terminal columns for this class.
    #[must_use]
    pub const fn columns(self) -> usize {
        match self {
            Self::Zero => 0,
            Self::Narrow => 1,
            Self::Wide => 2,
        }
    }
}

/// Returns `true` if `c` occupies no terminal column.
#[must_use]
pub fn is_zero_width(c: char) -> bool {
    matches!(
        c,
        '\u{0300}'..='\u{036F}'
            | '\u{200B}'..='\u{200F}'
            | '\u{2060}'..='\u{2064}'
            | '\u{20D0}'..='\u{20FF}'
            | '\u{FE00}'..='\u{FE0F}'
            | '\u{FE20}'..='\u{FE2F}'
            | '\u{FEFF}'
            | '\u{E0100}'..='\u{E01EF}'
    ) || (!c.is_control() && UnicodeWidthChar::width(c) == Some(0))
}

/// Returns `true` if `c` occupies two terminal columns.
#[must_use]
pub fn is_wide(c: char) -> bool {
    if is_zero_width(c) {
        return false;
    }
    // Pictographs render as emoji in practically every terminal even when
    // their default presentation is text.
    ('\u{1F300}'..='\u{1FAFF}').contains(&c) || UnicodeWidthChar::width(c) == Some(2)
}

/// Column width of a single character: 0, 1 or 2.
#[must_use]
pub fn char_width(c: char) -> usize {
    GlyphWidth::of(c).columns()
}

/// Column width of a raw codepoint.
///
/// Values that are not Unicode scalar values (surrogates, out of range) fall
/// back to a width of 1.
#[must_use]
pub fn codepoint_width(codepoint: u32) -> usize {
    char::from_u32(codepoint).map_or(1, char_width)
}

/// Display width of `s`, ignoring embedded escape sequences.
#[must_use]
pub fn visible_width(s: &str) -> usize {
    Tokens::new(s)
        .map(|token| match token {
            Token::Escape(_) => 0,
            Token::Char(c) => char_width(c),
        })
        .sum()
}

/// Removes every escape sequence from `s`.
#[must_use]
pub fn strip_ansi(s: &str) -> String {
    Tokens::new(s)
        .filter_map(|token| match token {
            Token::Escape(_) => None,
            Token::Char(c) => Some(c),
        })
        .collect()
}

/// Truncates `s` to `max_width` columns, keeping the leading characters.
///
/// Returns `s` unchanged when it already fits. Escape sequences preceding the
/// cut point are preserved and closed with a reset before the ellipsis.
#[must_use]
pub fn truncate(s: &str, max_width: usize) -> String {
    if visible_width(s) <= max_width {
        return s.to_string();
    }
    if max_width < ELLIPSIS_WIDTH {
        return String::new();
    }

    let budget = max_width - ELLIPSIS_WIDTH;
    let mut out = String::with_capacity(s.len());
    let mut used = 0;
    let mut styled = false;

    for token in Tokens::new(s) {
        match token {
            Token::Escape(seq) => {
                out.push_str(seq);
                styled = true;
            }
            Token::Char(c) => {
                let w = char_width(c);
                if used + w > budget {
                    break;
                }
                out.push(c);
                used += w;
            }
        }
    }

    pad(&mut out, budget - used);
    if styled {
        out.push_str(ansi::RESET);
    }
    out.push_str(ELLIPSIS);
    out
}

/// Truncates `s` to `max_width` columns, keeping the trailing characters.
///
/// Used to show the tail of long paths. Escape sequences from the dropped head
/// are carried over so the tail keeps the style that was active at the cut.
#[must_use]
pub fn truncate_from_start(s: &str, max_width: usize) -> String {
    if visible_width(s) <= max_width {
        return s.to_string();
    }
    if max_width < ELLIPSIS_WIDTH {
        return String::new();
    }

    let budget = max_width - ELLIPSIS_WIDTH;
    let tokens: Vec<Token<'_>> = Tokens::new(s).collect();

    let mut used = 0;
    let mut cut = tokens.len();
    for (idx, token) in tokens.iter().enumerate().rev() {
        if let Token::Char(c) = token {
            let w = char_width(*c);
            if used + w > budget {
                break;
            }
            used += w;
        }
        cut = idx;
    }

    // A zero-width mark cannot start the tail without its base character.
    while let Some(Token::Char(c)) = tokens.get(cut) {
        if !is_zero_width(*c) {
            break;
        }
        cut += 1;
    }

    let mut out = String::with_capacity(s.len());
    out.push_str(ELLIPSIS);
    pad(&mut out, budget - used);
    for token in &tokens[..cut] {
        if let Token::Escape(seq) = token {
            out.push_str(seq);
        }
    }
    for token in &tokens[cut..] {
        match token {
            Token::Escape(seq) => out.push_str(seq),
            Token::Char(c) => out.push(*c),
        }
    }
    out
}

fn pad(out: &mut String, columns: usize) {
    out.extend(std::iter::repeat(' ').take(columns));
}

/// A visible character or a complete escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    Escape(&'a str),
    Char(char),
}

/// Splits a string into escape sequences and visible characters.
///
/// Recognizes CSI (`ESC [ ... final`), OSC (`ESC ] ... BEL` or `ESC ] ... ESC \`)
/// and two-byte escapes. A dangling `ESC` at the end is treated as an escape.
pub(crate) struct Tokens<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub(crate) const fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn escape_end(&self) -> usize {
        let bytes = self.src.as_bytes();
        let start = self.pos;
        match bytes.get(start + 1) {
            Some(b'[') => {
                let mut i = start + 2;
                while i < bytes.len() {
                    if (0x40..=0x7E).contains(&bytes[i]) {
                        return i + 1;
                    }
                    i += 1;
                }
                bytes.len()
            }
            Some(b']') => {
                let mut i = start + 2;
                while i < bytes.len() {
                    if bytes[i] == 0x07 {
                        return i + 1;
                    }
                    if bytes[i] == 0x1b && bytes.get(i + 1) == Some(&b'\\') {
                        return i + 2;
                    }
                    i += 1;
                }
                bytes.len()
            }
            Some(_) => {
                // ESC followed by a single (possibly multi-byte) character.
                let rest = &self.src[start + 1..];
                start + 1 + rest.chars().next().map_or(0, char::len_utf8)
            }
            None => start + 1,
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let src = self.src;
        let c = src[self.pos..].chars().next()?;
        if c == '\u{1b}' {
            let end = self.escape_end();
            let seq = &src[self.pos..end];
            self.pos = end;
            Some(Token::Escape(seq))
        } else {
            self.pos += c.len_utf8();
            Some(Token::Char(c))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_width_counts_columns() {
        assert_eq!(visible_width("hello"), 5);
        assert_eq!(visible_width(""), 0);
        assert_eq!(visible_width("📁 file"), 7);
        assert_eq!(visible_width("日本語"), 6);
    }

    #[test]
    fn visible_width_ignores_escapes() {
        assert_eq!(visible_width("\u{1b}[1mhello\u{1b}[0m"), 5);
        assert_eq!(visible_width("\u{1b}[38;5;100mhi\u{1b}[39m"), 2);
        assert_eq!(visible_width("\u{1b}]0;title\u{7}x"), 1);
        assert_eq!(visible_width("\u{1b}]8;;http://x\u{1b}\\link"), 4);
    }

    #[test]
    fn char_width_classes() {
        assert_eq!(char_width('a'), 1);
        assert_eq!(char_width(' '), 1);
        assert_eq!(codepoint_width(0x1F4C1), 2);
        assert_eq!(codepoint_width(0xFE0F), 0);
        assert_eq!(codepoint_width(0x200D), 0);
        assert_eq!(codepoint_width(0xD800), 1);
        assert_eq!(GlyphWidth::of('語'), GlyphWidth::Wide);
        assert_eq!(GlyphWidth::of('\u{0301}'), GlyphWidth::Zero);
    }

    #[test]
    fn zero_and_wide_queries() {
        assert!(is_zero_width('\u{FE00}'));
        assert!(is_zero_width('\u{200B}'));
        assert!(!is_zero_width('a'));
        assert!(is_wide('📁'));
        assert!(!is_wide('a'));
        assert!(!is_wide(' '));
    }

    #[test]
    fn strip_ansi_keeps_text() {
        assert_eq!(strip_ansi("\u{1b}[1mbold\u{1b}[22m plain"), "bold plain");
    }

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        let result = truncate("hello world", 8);
        assert_eq!(result, "hello w…");
        assert_eq!(visible_width(&result), 8);
    }

    #[test]
    fn truncate_pads_split_wide_character() {
        let result = truncate("日本語テキスト", 6);
        assert_eq!(result, "日本 …");
        assert_eq!(visible_width(&result), 6);
    }

    #[test]
    fn truncate_keeps_leading_escapes() {
        let result = truncate("\u{1b}[1mhello world\u{1b}[22m", 8);
        assert!(result.starts_with("\u{1b}[1mhello w"));
        assert!(result.ends_with(ELLIPSIS));
        assert_eq!(visible_width(&result), 8);
    }

    #[test]
    fn truncate_to_zero_is_empty() {
        assert_eq!(truncate("hello", 0), "");
        assert_eq!(truncate_from_start("hello", 0), "");
        assert_eq!(truncate("hello", 1), "…");
    }

    #[test]
    fn truncate_from_start_keeps_tail() {
        let result = truncate_from_start("hello world this is long", 10);
        assert_eq!(visible_width(&result), 10);
        assert!(result.starts_with(ELLIPSIS));
        assert!(result.ends_with("is long"));
    }

    #[test]
    fn truncate_from_start_pads_split_wide_character() {
        let result = truncate_from_start("abc日本", 4);
        assert_eq!(result, "… 本");
        assert_eq!(visible_width(&result), 4);
    }

    #[test]
    fn truncate_from_start_carries_head_style() {
        let result = truncate_from_start("\u{1b}[2mprefix/suffix\u{1b}[22m", 7);
        assert_eq!(visible_width(&result), 7);
        assert!(result.contains("\u{1b}[2m"));
        assert!(strip_ansi(&result).ends_with("suffix"));
    }
}
