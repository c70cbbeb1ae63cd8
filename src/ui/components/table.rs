//! Table component: the listing of buckets, prefixes and objects.
//!
//! Each row shows a selection marker, an icon and the name with fuzzy match
//! highlights on the left, and the size and last-modified time right-aligned.
//! The selected row is painted with the palette selection background (or the
//! danger background while a delete is being confirmed).

use crate::ui::helpers::{self, SELECTION_MARKER};
use crate::ui::line::Line;
use crate::ui::screen::Screen;
use crate::ui::theme;
use crate::ui::viewmodel::{DisplayRow, RowKind};

/// Spaces drawn in place of the selection marker on unselected rows.
const MARKER_PAD: &str = "  ";

/// Appends the visible window of `rows` to the screen body.
///
/// Only as many rows as [`Screen::body_capacity`] allows are appended, chosen
/// so that `selected` stays visible. Header and footer must already be
/// composed for the capacity to be right.
pub fn render_table(screen: &mut Screen, rows: &[DisplayRow], selected: usize, confirming_delete: bool) {
    let window = helpers::visible_window(selected, rows.len(), screen.body_capacity());
    let palette = theme::palette();

    for (idx, row) in rows.iter().enumerate().take(window.end).skip(window.start) {
        let is_selected = idx == selected;
        let background = match (is_selected, confirming_delete) {
            (true, true) => Some(palette.danger_bg),
            (true, false) => Some(palette.selected_bg),
            (false, _) => None,
        };
        screen
            .body
            .add_line_with(background, |line| compose_row(line, row, is_selected));
    }
}

fn compose_row(line: &mut Line, row: &DisplayRow, is_selected: bool) {
    let left = line.left();
    if is_selected {
        left.write_highlight(SELECTION_MARKER);
    } else {
        left.write(MARKER_PAD);
    }
    left.emoji(row.kind.icon()).write(" ");
    helpers::write_highlighted(left, &row.name, &row.positions);

    if row.kind == RowKind::Object {
        line.right()
            .write_muted(helpers::format_size(row.size))
            .write("  ")
            .write_muted(helpers::format_time(row.modified));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::metrics;

    fn plain_rows(screen: &Screen) -> Vec<String> {
        screen
            .rows()
            .unwrap()
            .iter()
            .map(|row| metrics::strip_ansi(row))
            .collect()
    }

    #[test]
    fn rows_show_marker_icon_and_metadata() {
        let mut screen = Screen::new(40, 3);
        let rows = vec![
            DisplayRow::new("logs/"),
            DisplayRow::new("a.txt").with_size(Some(2048)),
        ];
        render_table(&mut screen, &rows, 1, false);

        let out = plain_rows(&screen);
        assert_eq!(out[0], "  📁 logs/");
        assert!(out[1].starts_with("→ 📄 a.txt"));
        assert!(out[1].ends_with("2.00 KB  -"));
        assert_eq!(metrics::visible_width(&out[1]), 40);
    }

    #[test]
    fn selected_row_gets_background() {
        let mut screen = Screen::new(20, 2);
        render_table(&mut screen, &[DisplayRow::new("x/"), DisplayRow::new("y/")], 0, false);
        let palette = theme::palette();
        assert_eq!(screen.body.lines()[0].background(), Some(palette.selected_bg));
        assert_eq!(screen.body.lines()[1].background(), None);

        screen.clear();
        render_table(&mut screen, &[DisplayRow::new("x/")], 0, true);
        assert_eq!(screen.body.lines()[0].background(), Some(palette.danger_bg));
    }

    #[test]
    fn only_visible_window_is_rendered() {
        let mut screen = Screen::new(20, 3);
        let rows: Vec<DisplayRow> = (0..10).map(|i| DisplayRow::new(format!("p{i}/"))).collect();
        render_table(&mut screen, &rows, 9, false);
        let out = plain_rows(&screen);
        assert_eq!(screen.body.len(), 3);
        assert!(out[2].contains("p9/"));
        assert!(out[0].contains("p7/"));
    }
}
