//! Search bar component: the query input line.

use crate::domain::Result;
use crate::ui::input::InputField;
use crate::ui::screen::Screen;
use crate::ui::text::Style;
use crate::ui::viewmodel::SearchBarInfo;

/// Prompt written before the query.
pub const SEARCH_PROMPT: &str = "Search: ";

/// Placeholder shown while the query is empty.
pub const SEARCH_PLACEHOLDER: &str = "type to filter...";

/// Appends the search input line to the screen header.
///
/// # Layout
///
/// ```text
/// Search: rep_                                      esc cancel
/// ```
///
/// # Errors
///
/// Returns [`BetterS3Error::DuplicateInput`](crate::domain::BetterS3Error)
/// if another line already owns the cursor.
pub fn render_search_bar(screen: &mut Screen, search: &SearchBarInfo) -> Result<()> {
    let field = InputField::new(SEARCH_PLACEHOLDER, search.query.as_str(), search.cursor);
    let line = screen.input_line(SEARCH_PROMPT, &field)?;
    line.right().write_styled("esc cancel", Style::Hint);
    Ok(())
}
