//! Composable UI components.
//!
//! Each component appends lines to one section of a [`Screen`]:
//!
//! - [`header`]: title bar with location, into the header
//! - [`search`]: query input line, into the header
//! - [`footer`]: key hints and status, into the footer
//! - [`table`]: listing rows, into the body
//! - [`empty`]: empty-state message, into the body
//!
//! Components never write to the terminal and never compute the frame size;
//! the [`Screen`] decides how many body rows fit.
//!
//! [`Screen`]: crate::ui::Screen

pub mod empty;
pub mod footer;
pub mod header;
pub mod search;
pub mod table;

pub use empty::render_empty_state;
pub use footer::render_footer;
pub use header::render_header;
pub use search::render_search_bar;
pub use table::render_table;
