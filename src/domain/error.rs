//! Error types for the BetterS3TUI core.
//!
//! This module defines the centralized error type [`BetterS3Error`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Two variants are usage errors: the caller violated a contract of the
//! rendering or search engine ([`BetterS3Error::DuplicateInput`],
//! [`BetterS3Error::MalformedEntry`]). They are not retried or recovered from
//! automatically. The remaining variants wrap environmental failures.

use thiserror::Error;

/// The main error type for BetterS3TUI operations.
///
/// # Examples
///
/// ```
/// use betters3tui::BetterS3Error;
///
/// fn validate_config() -> Result<(), BetterS3Error> {
///     Err(BetterS3Error::Config("Missing required field".to_string()))
/// }
///
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum BetterS3Error {
    /// A second line tried to claim the terminal cursor within one frame.
    ///
    /// Only one line per [`Screen`](crate::ui::Screen) may own the input
    /// cursor. `existing_row` is the frame row of the line that already owns it.
    #[error("duplicate input line: row {existing_row} already owns the cursor")]
    DuplicateInput {
        /// Frame row of the line already marked as the input line.
        existing_row: usize,
    },

    /// A search candidate could not be normalized into an index entry.
    ///
    /// Raised at index time when a record exposes neither accepted spelling of
    /// the text field, or a base score that is not a number.
    #[error("malformed entry at index {index}: {reason}")]
    MalformedEntry {
        /// Position of the offending record in the candidate list.
        index: usize,
        /// Human readable description of what was missing or invalid.
        reason: String,
    },

    /// Filesystem or terminal I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or lookup failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BetterS3Error {
    /// Returns `true` for errors caused by a caller logic bug rather than the
    /// environment.
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(self, Self::DuplicateInput { .. } | Self::MalformedEntry { .. })
    }
}

/// A specialized `Result` type for BetterS3TUI operations.
///
/// # Examples
///
/// ```
/// use betters3tui::Result;
///
/// fn render_frame() -> Result<()> {
///     Ok(())
/// }
/// # render_frame().unwrap();
/// ```
pub type Result<T> = std::result::Result<T, BetterS3Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_are_classified() {
        assert!(BetterS3Error::DuplicateInput { existing_row: 2 }.is_usage_error());
        assert!(BetterS3Error::MalformedEntry {
            index: 0,
            reason: "no text".into()
        }
        .is_usage_error());
        assert!(!BetterS3Error::Config("bad".into()).is_usage_error());
    }

    #[test]
    fn messages_name_the_problem() {
        let err = BetterS3Error::DuplicateInput { existing_row: 3 };
        assert_eq!(
            err.to_string(),
            "duplicate input line: row 3 already owns the cursor"
        );
        let err = BetterS3Error::MalformedEntry {
            index: 4,
            reason: "missing `text`".into(),
        };
        assert_eq!(err.to_string(), "malformed entry at index 4: missing `text`");
    }
}
