//! Frame assembly: sections of lines rendered into one terminal write.
//!
//! # Architecture
//!
//! ```text
//! Screen
//! ├── header: Section   (title, search input)
//! ├── body:   Section   (result rows, clipped to body_capacity)
//! └── footer: Section   (key hints, status)
//! ```
//!
//! A [`Screen`] is built fresh for every frame, populated by the caller and
//! rendered once. Its width and height are snapshotted from a
//! [`TerminalSize`] source at construction and on [`Screen::refresh_size`],
//! never mid-render.
//!
//! # Frame Format
//!
//! The rendered frame starts with a cursor-home sequence. Every row is
//! followed by an end-of-line clear so rows shorter than the previous frame
//! leave no stale characters. The body is padded with blank rows so the footer
//! always occupies the last rows of the terminal. When a line owns the input
//! cursor, the frame ends by moving the cursor there.
//!
//! # Example
//!
//! ```rust
//! use betters3tui::ui::Screen;
//!
//! let mut screen = Screen::new(20, 4);
//! screen.header.add_line().left().write("Buckets");
//! screen.body.add_line().left().write("photos");
//! screen.footer.add_line().right().write("q quit");
//!
//! let rows = screen.rows().unwrap();
//! assert_eq!(rows, vec!["Buckets", "photos", "", "              q quit"]);
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::domain::{BetterS3Error, Result};
use crate::ui::ansi;
use crate::ui::input::InputField;
use crate::ui::line::Line;
use crate::ui::text::Style;

/// Width used when the terminal size cannot be queried.
pub const FALLBACK_WIDTH: usize = 80;

/// Height used when the terminal size cannot be queried.
pub const FALLBACK_HEIGHT: usize = 24;

/// Character used by [`Section::divider`].
pub const DIVIDER_CHAR: char = '─';

const ROW_SEPARATOR: &str = "\r\n";

/// Source of terminal dimensions.
pub trait TerminalSize: fmt::Debug {
    /// Returns `(width, height)` in columns and rows.
    fn size(&self) -> (usize, usize);
}

/// Queries the controlling terminal through crossterm.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermTerminal;

impl TerminalSize for CrosstermTerminal {
    fn size(&self) -> (usize, usize) {
        match crossterm::terminal::size() {
            Ok((cols, rows)) if cols > 0 && rows > 0 => (usize::from(cols), usize::from(rows)),
            Ok(_) => {
                tracing::debug!("terminal reported zero size, using fallback");
                (FALLBACK_WIDTH, FALLBACK_HEIGHT)
            }
            Err(e) => {
                tracing::debug!(error = %e, "terminal size unavailable, using fallback");
                (FALLBACK_WIDTH, FALLBACK_HEIGHT)
            }
        }
    }
}

/// Fixed dimensions, for tests and off-screen rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSize {
    /// Columns.
    pub width: usize,
    /// Rows.
    pub height: usize,
}

impl TerminalSize for FixedSize {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }
}

/// Ordered list of lines; insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    lines: Vec<Line>,
}

impl Section {
    /// Creates an empty section.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an empty line and returns it for composition.
    pub fn add_line(&mut self) -> &mut Line {
        self.push(Line::new())
    }

    /// Builds a line with `configure`, appends it and returns it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use betters3tui::ui::Section;
    ///
    /// let mut section = Section::new();
    /// section.add_line_with(Some(237), |line| {
    ///     line.left().write("selected");
    /// });
    /// assert_eq!(section.lines()[0].background(), Some(237));
    /// ```
    pub fn add_line_with<F>(&mut self, background: Option<u8>, configure: F) -> &mut Line
    where
        F: FnOnce(&mut Line),
    {
        let mut line = Line::with_background(background);
        configure(&mut line);
        self.push(line)
    }

    /// Appends an already composed line.
    pub fn push(&mut self, line: Line) -> &mut Line {
        self.lines.push(line);
        let last = self.lines.len() - 1;
        &mut self.lines[last]
    }

    /// Appends a full-width horizontal rule.
    pub fn divider(&mut self) -> &mut Line {
        let line = self.add_line();
        line.left().fill_styled(DIVIDER_CHAR, Style::Dim);
        line
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in display order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the section has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn input_index(&self) -> Option<usize> {
        self.lines.iter().position(Line::has_input)
    }
}

/// One terminal frame.
#[derive(Debug)]
pub struct Screen {
    /// Rows at the top of the frame.
    pub header: Section,
    /// Scrollable rows between header and footer.
    pub body: Section,
    /// Rows pinned to the bottom of the frame.
    pub footer: Section,
    width: usize,
    height: usize,
    size_source: Box<dyn TerminalSize>,
}

impl Screen {
    /// Creates a screen with fixed dimensions.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_size_source(Box::new(FixedSize { width, height }))
    }

    /// Creates a screen sized to the controlling terminal.
    #[must_use]
    pub fn from_terminal() -> Self {
        Self::with_size_source(Box::new(CrosstermTerminal))
    }

    /// Creates a screen whose size comes from `source`.
    #[must_use]
    pub fn with_size_source(source: Box<dyn TerminalSize>) -> Self {
        let (width, height) = source.size();
        Self {
            header: Section::new(),
            body: Section::new(),
            footer: Section::new(),
            width,
            height,
            size_source: source,
        }
    }

    /// Frame width in columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Frame height in rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Re-queries the size source, keeping all accumulated lines.
    pub fn refresh_size(&mut self) {
        let (width, height) = self.size_source.size();
        if (width, height) != (self.width, self.height) {
            tracing::debug!(width, height, "screen resized");
        }
        self.width = width;
        self.height = height;
    }

    /// Clears header, body and footer.
    pub fn clear(&mut self) {
        self.header.clear();
        self.body.clear();
        self.footer.clear();
    }

    /// Rows available to the body once header and footer are placed.
    #[must_use]
    pub fn body_capacity(&self) -> usize {
        self.height
            .saturating_sub(self.header.len())
            .saturating_sub(self.footer.len())
    }

    /// Appends an input line to the header and marks it as the cursor owner.
    ///
    /// # Errors
    ///
    /// Returns [`BetterS3Error::DuplicateInput`] if a line on this screen
    /// already owns the cursor.
    pub fn input(&mut self, placeholder: &str, value: &str, cursor: Option<usize>) -> Result<&mut Line> {
        let field = InputField::new(placeholder, value, cursor);
        self.input_line("", &field)
    }

    /// Like [`Screen::input`], with a prompt written before the field.
    ///
    /// # Errors
    ///
    /// Returns [`BetterS3Error::DuplicateInput`] if a line on this screen
    /// already owns the cursor.
    pub fn input_line(&mut self, prompt: &str, field: &InputField) -> Result<&mut Line> {
        if let Some(existing_row) = self.input_row() {
            return Err(BetterS3Error::DuplicateInput { existing_row });
        }

        let line = self.header.add_line();
        if !prompt.is_empty() {
            line.left().write_styled(prompt, Style::Highlight);
        }
        let column = line.left().content_width() + field.cursor_column();
        field.write_to(line.left());
        line.mark_has_input(column);
        Ok(line)
    }

    /// Frame row of the first line owning the cursor, counting header, then
    /// body, then footer lines.
    fn input_row(&self) -> Option<usize> {
        let body_offset = self.header.len();
        let footer_offset = body_offset + self.body.len();
        self.header
            .input_index()
            .or_else(|| self.body.input_index().map(|i| body_offset + i))
            .or_else(|| self.footer.input_index().map(|i| footer_offset + i))
    }

    fn check_single_input(&self) -> Result<()> {
        let owners = [&self.header, &self.body, &self.footer]
            .iter()
            .flat_map(|section| section.lines())
            .filter(|line| line.has_input())
            .count();
        match self.input_row() {
            Some(existing_row) if owners > 1 => Err(BetterS3Error::DuplicateInput { existing_row }),
            _ => Ok(()),
        }
    }

    /// Renders every row of the frame without terminal control sequences.
    ///
    /// The body is clipped to [`Screen::body_capacity`] and padded with empty
    /// rows; the whole frame is clipped to the screen height.
    ///
    /// # Errors
    ///
    /// Returns [`BetterS3Error::DuplicateInput`] if more than one line owns the
    /// cursor.
    pub fn rows(&self) -> Result<Vec<String>> {
        Ok(self.layout()?.0)
    }

    /// Rendered rows plus the 0-based `(row, column)` of the cursor owner.
    fn layout(&self) -> Result<(Vec<String>, Option<(usize, usize)>)> {
        self.check_single_input()?;

        let capacity = self.body_capacity();
        let mut rows = Vec::with_capacity(self.height);
        let mut cursor = None;

        let mut place = |line: &Line, rows: &mut Vec<String>| {
            if let Some(column) = line.input_column() {
                cursor = Some((rows.len(), column.min(self.width.saturating_sub(1))));
            }
            rows.push(line.render(self.width));
        };

        for line in self.header.lines() {
            place(line, &mut rows);
        }
        for line in self.body.lines().iter().take(capacity) {
            place(line, &mut rows);
        }
        let shown = self.body.len().min(capacity);
        rows.extend(std::iter::repeat(String::new()).take(capacity - shown));
        for line in self.footer.lines() {
            place(line, &mut rows);
        }

        rows.truncate(self.height);
        let cursor = cursor.filter(|(row, _)| *row < rows.len());
        Ok((rows, cursor))
    }

    /// Renders the frame as one string ready to write to the terminal.
    ///
    /// # Errors
    ///
    /// Returns [`BetterS3Error::DuplicateInput`] if more than one line owns the
    /// cursor.
    pub fn render(&self) -> Result<String> {
        let (rows, cursor) = self.layout()?;
        tracing::trace!(rows = rows.len(), width = self.width, "rendering frame");

        let mut frame = String::from(ansi::HOME);
        for (idx, row) in rows.iter().enumerate() {
            if idx > 0 {
                frame.push_str(ROW_SEPARATOR);
            }
            frame.push_str(row);
            frame.push_str(ansi::CLEAR_EOL);
        }
        if let Some((row, column)) = cursor {
            frame.push_str(&ansi::move_to(row + 1, column + 1));
        }
        Ok(frame)
    }

    /// Writes the rendered frame to `writer` and flushes it.
    ///
    /// # Errors
    ///
    /// Returns [`BetterS3Error::DuplicateInput`] for an invalid frame and
    /// [`BetterS3Error::Io`] if writing fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let frame = self.render()?;
        writer.write_all(frame.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Writes the rendered frame to stdout.
    ///
    /// # Errors
    ///
    /// See [`Screen::flush_to`].
    pub fn flush(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.flush_to(&mut handle)
    }
}
