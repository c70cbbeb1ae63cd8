//! View model types representing renderable UI state.
//!
//! View models are plain data computed by the application layer (or the
//! preview binary) and consumed by the [`renderer`](crate::ui::renderer).
//! They contain no business logic, only display-ready values: names with
//! their fuzzy match positions, sizes, timestamps and the selection.
//!
//! # Example
//!
//! ```rust
//! use betters3tui::ui::viewmodel::{DisplayRow, FooterInfo, HeaderInfo, SearchView};
//!
//! let view = SearchView {
//!     header: HeaderInfo::new("betters3tui", "s3://photos/2024/"),
//!     search: None,
//!     rows: vec![DisplayRow::new("holiday.jpg").with_size(Some(2048))],
//!     selected: 0,
//!     confirming_delete: false,
//!     footer: FooterInfo::browsing(),
//!     empty_state: None,
//! };
//! assert_eq!(view.rows[0].kind.icon(), "📄");
//! ```

use chrono::{DateTime, Utc};

use crate::search::Match;
use crate::ui::helpers::{self, FILE_ICON, FOLDER_ICON, PROGRESS_BAR_WIDTH};

/// Complete view model for one frame of the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    /// Title and current location.
    pub header: HeaderInfo,
    /// Search input, present while searching.
    pub search: Option<SearchBarInfo>,
    /// Rows to list, in display order.
    pub rows: Vec<DisplayRow>,
    /// Index into `rows` of the selected row.
    pub selected: usize,
    /// Paints the selected row with the danger background.
    pub confirming_delete: bool,
    /// Key hints and status message.
    pub footer: FooterInfo,
    /// Message shown instead of the table when there is nothing to list.
    pub empty_state: Option<EmptyState>,
}

/// What a row represents, which decides its icon and metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// A bucket.
    Bucket,
    /// A key prefix ("folder").
    Prefix,
    /// An object.
    Object,
}

impl RowKind {
    /// Prefixes end with `/`; everything else is an object.
    #[must_use]
    pub fn infer(name: &str) -> Self {
        if name.ends_with('/') {
            Self::Prefix
        } else {
            Self::Object
        }
    }

    /// Emoji drawn in front of the name.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Bucket | Self::Prefix => FOLDER_ICON,
            Self::Object => FILE_ICON,
        }
    }
}

/// One listed bucket, prefix or object.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    /// Row kind.
    pub kind: RowKind,
    /// Display name.
    pub name: String,
    /// Matched character indices into `name`, from the fuzzy engine.
    pub positions: Vec<usize>,
    /// Object size in bytes.
    pub size: Option<u64>,
    /// Last-modified time.
    pub modified: Option<DateTime<Utc>>,
}

impl DisplayRow {
    /// Creates a row, inferring its kind from `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            kind: RowKind::infer(&name),
            name,
            positions: Vec::new(),
            size: None,
            modified: None,
        }
    }

    /// Creates a row from a fuzzy match, carrying its positions.
    #[must_use]
    pub fn from_match<T>(m: &Match<'_, T>) -> Self {
        Self::new(m.entry.text()).with_positions(m.positions.clone())
    }

    /// Overrides the inferred kind.
    #[must_use]
    pub fn with_kind(mut self, kind: RowKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the matched positions.
    #[must_use]
    pub fn with_positions(mut self, positions: Vec<usize>) -> Self {
        self.positions = positions;
        self
    }

    /// Sets the size.
    #[must_use]
    pub fn with_size(mut self, size: Option<u64>) -> Self {
        self.size = size;
        self
    }

    /// Sets the last-modified time.
    #[must_use]
    pub fn with_modified(mut self, modified: Option<DateTime<Utc>>) -> Self {
        self.modified = modified;
        self
    }
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text.
    pub title: String,
    /// Current location, e.g. `s3://bucket/prefix/`.
    pub location: String,
}

impl HeaderInfo {
    /// Creates header info.
    #[must_use]
    pub fn new(title: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
        }
    }
}

/// Search input state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current query.
    pub query: String,
    /// Cursor position in characters; `None` means end of query.
    pub cursor: Option<usize>,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// `(key, action)` pairs shown as hints.
    pub keybindings: Vec<(String, String)>,
    /// Transient status message.
    pub status: Option<StatusMessage>,
}

impl FooterInfo {
    fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            keybindings: pairs
                .iter()
                .map(|(key, action)| ((*key).to_string(), (*action).to_string()))
                .collect(),
            status: None,
        }
    }

    /// Hints while browsing a listing.
    #[must_use]
    pub fn browsing() -> Self {
        Self::from_pairs(&[
            ("↑↓", "navigate"),
            ("enter", "open"),
            ("/", "search"),
            ("d", "download"),
            ("esc", "back"),
            ("q", "quit"),
        ])
    }

    /// Hints while the search input is active.
    #[must_use]
    pub fn searching() -> Self {
        Self::from_pairs(&[("↑↓", "navigate"), ("enter", "open"), ("esc", "cancel")])
    }

    /// Attaches a status message.
    #[must_use]
    pub fn with_status(mut self, status: StatusMessage) -> Self {
        self.status = Some(status);
        self
    }
}

/// Status message shown on the right of the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    /// Informational message.
    Info(String),
    /// Error message.
    Error(String),
}

impl StatusMessage {
    /// Progress of a running download, with a [`PROGRESS_BAR_WIDTH`]-cell bar.
    #[must_use]
    pub fn download(filename: &str, downloaded: u64, total: u64) -> Self {
        Self::Info(format!(
            "Downloading {filename}: {}",
            helpers::format_progress(downloaded, total, PROGRESS_BAR_WIDTH)
        ))
    }
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No objects found").
    pub message: String,
    /// Secondary explanatory text.
    pub subtitle: String,
}

impl EmptyState {
    /// Message for a search without results.
    #[must_use]
    pub fn no_matches(query: &str) -> Self {
        Self {
            message: "No matches".to_string(),
            subtitle: format!("Nothing matches \"{query}\""),
        }
    }
}
