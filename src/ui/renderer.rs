//! Top-level rendering coordinator.
//!
//! This module turns a [`SearchView`] into the lines of a [`Screen`],
//! delegating each region to a component. It handles the two layouts (listing
//! and empty state) and the optional search bar.
//!
//! # Architecture
//!
//! Composition happens in a fixed order because the body's row budget depends
//! on how many header and footer rows exist:
//!
//! 1. **Header**: title bar, the search input when searching, then a divider
//! 2. **Footer**: divider, key hints and status message
//! 3. **Body**: the visible window of rows, or the empty-state message
//!
//! # Example
//!
//! ```rust
//! use betters3tui::ui::renderer::render;
//! use betters3tui::ui::viewmodel::{DisplayRow, FooterInfo, HeaderInfo, SearchView};
//! use betters3tui::ui::Screen;
//!
//! let view = SearchView {
//!     header: HeaderInfo::new("betters3tui", "s3://bucket/"),
//!     search: None,
//!     rows: vec![DisplayRow::new("docs/")],
//!     selected: 0,
//!     confirming_delete: false,
//!     footer: FooterInfo::browsing(),
//!     empty_state: None,
//! };
//! let mut screen = Screen::new(60, 10);
//! render(&view, &mut screen).unwrap();
//! assert_eq!(screen.rows().unwrap().len(), 10);
//! ```

use crate::domain::Result;
use crate::ui::components;
use crate::ui::screen::Screen;
use crate::ui::viewmodel::SearchView;

/// Composes `view` onto `screen`, replacing whatever it held.
///
/// # Errors
///
/// Returns [`BetterS3Error::DuplicateInput`](crate::domain::BetterS3Error)
/// if the search bar cannot claim the cursor.
pub fn render(view: &SearchView, screen: &mut Screen) -> Result<()> {
    let _span = tracing::trace_span!("render_view", rows = view.rows.len()).entered();
    screen.clear();

    components::render_header(screen, &view.header);
    if let Some(search) = &view.search {
        components::render_search_bar(screen, search)?;
    }
    screen.header.divider();
    components::render_footer(screen, &view.footer);

    match &view.empty_state {
        Some(empty) if view.rows.is_empty() => components::render_empty_state(screen, empty),
        _ => components::render_table(screen, &view.rows, view.selected, view.confirming_delete),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::metrics;
    use crate::ui::viewmodel::{DisplayRow, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo};

    fn view(rows: Vec<DisplayRow>) -> SearchView {
        SearchView {
            header: HeaderInfo::new("betters3tui", "s3://bucket/"),
            search: Some(SearchBarInfo {
                query: "do".to_string(),
                cursor: None,
            }),
            rows,
            selected: 0,
            confirming_delete: false,
            footer: FooterInfo::searching(),
            empty_state: Some(EmptyState::no_matches("do")),
        }
    }

    #[test]
    fn search_layout_puts_footer_last() {
        let mut screen = Screen::new(50, 8);
        render(&view(vec![DisplayRow::new("docs/")]), &mut screen).unwrap();

        let rows: Vec<String> = screen.rows().unwrap().iter().map(|r| metrics::strip_ansi(r)).collect();
        assert_eq!(rows.len(), 8);
        assert!(rows[0].contains("betters3tui"));
        assert!(rows[1].starts_with("Search: do_"));
        assert!(rows[2].chars().all(|c| c == '─'));
        assert!(rows[3].contains("docs/"));
        assert!(rows[7].contains("esc cancel"));
    }

    #[test]
    fn empty_rows_show_empty_state() {
        let mut screen = Screen::new(50, 10);
        render(&view(Vec::new()), &mut screen).unwrap();
        let rows: Vec<String> = screen.rows().unwrap().iter().map(|r| metrics::strip_ansi(r)).collect();
        assert!(rows.iter().any(|r| r.trim() == "No matches"));
    }

    #[test]
    fn rendering_twice_does_not_duplicate_input() {
        let mut screen = Screen::new(50, 8);
        let v = view(vec![DisplayRow::new("docs/")]);
        render(&v, &mut screen).unwrap();
        render(&v, &mut screen).unwrap();
        assert!(screen.render().is_ok());
    }

    #[test]
    fn divider_closes_header_with_or_without_search() {
        let mut screen = Screen::new(40, 8);
        let mut browsing = view(vec![DisplayRow::new("docs/")]);
        browsing.search = None;
        render(&browsing, &mut screen).unwrap();
        assert_eq!(screen.header.len(), 2);
        let last = metrics::strip_ansi(&screen.header.lines()[1].render(40));
        assert!(last.chars().all(|c| c == '─'));

        render(&view(vec![DisplayRow::new("docs/")]), &mut screen).unwrap();
        assert_eq!(screen.header.len(), 3);
        assert!(screen.header.lines()[1].has_input());
    }
}
