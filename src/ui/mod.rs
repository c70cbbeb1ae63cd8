//! Text-mode UI composition engine.
//!
//! This module lays out styled, width-aware lines into fixed-size terminal
//! frames. Everything is in-memory: the only terminal I/O is
//! [`Screen::flush`].
//!
//! # Architecture
//!
//! Leaf modules first:
//!
//! ```text
//! metrics, ansi → text → segment → line → screen
//!                               ↘ input ↗
//! SearchView → renderer → components → Screen → frame string
//! ```
//!
//! # Modules
//!
//! - [`metrics`]: Display width, ANSI stripping, truncation
//! - [`ansi`]: Escape sequence builders and constants
//! - [`text`]: Global color toggle and semantic styles
//! - [`theme`]: Palettes and theme loading
//! - [`segment`]: Styled fragment buffers with fill markers
//! - [`line`]: Left/center/right row layout with backgrounds
//! - [`screen`]: Header/body/footer sections and frame rendering
//! - [`input`]: Editable text with a visible cursor
//! - [`helpers`]: Match highlighting, sizes, timestamps, scroll windows
//! - [`viewmodel`]: Display-ready browser state
//! - [`components`]: Header, search bar, table, footer, empty state
//! - [`renderer`]: View model to screen composition
//!
//! # Example
//!
//! ```rust
//! use betters3tui::ui::Screen;
//!
//! let mut screen = Screen::new(30, 3);
//! screen.header.add_line().left().write_bold("s3://bucket");
//! screen.footer.add_line().right().write_dim("q quit");
//! let frame = screen.render().unwrap();
//! assert!(frame.contains("s3://bucket"));
//! ```

pub mod ansi;
pub mod components;
pub mod helpers;
pub mod input;
pub mod line;
pub mod metrics;
pub mod renderer;
pub mod screen;
pub mod segment;
pub mod text;
pub mod theme;
pub mod viewmodel;

pub use input::InputField;
pub use line::Line;
pub use renderer::render;
pub use screen::{CrosstermTerminal, FixedSize, Screen, Section, TerminalSize};
pub use segment::{Segment, SegmentWriter};
pub use text::Style;
pub use theme::{Palette, Theme};
pub use viewmodel::{DisplayRow, SearchView};
