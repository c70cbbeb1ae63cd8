use betters3tui::ui::ansi;
use betters3tui::ui::metrics::{strip_ansi, visible_width};
use betters3tui::ui::viewmodel::{
    DisplayRow, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, SearchView, StatusMessage,
};
use betters3tui::ui::{render, Screen};
use betters3tui::BetterS3Error;

fn listing(count: usize, selected: usize) -> SearchView {
    SearchView {
        header: HeaderInfo::new("betters3tui", "s3://bucket/"),
        search: Some(SearchBarInfo {
            query: "file".to_string(),
            cursor: None,
        }),
        rows: (0..count)
            .map(|i| DisplayRow::new(format!("file-{i}")).with_size(Some(1024)))
            .collect(),
        selected,
        confirming_delete: false,
        footer: FooterInfo::browsing().with_status(StatusMessage::Info(format!("{count} items"))),
        empty_state: None,
    }
}

fn plain(screen: &Screen) -> Vec<String> {
    screen.rows().unwrap().iter().map(|row| strip_ansi(row)).collect()
}

#[test]
fn frame_fills_height_with_footer_last() {
    let mut screen = Screen::new(80, 10);
    render(&listing(2, 0), &mut screen).unwrap();

    let rows = plain(&screen);
    assert_eq!(rows.len(), 10);
    assert!(rows[0].contains("betters3tui"));
    assert!(rows[0].ends_with("s3://bucket/"));
    assert!(rows[1].starts_with("Search: file"));
    assert!(rows[1].ends_with("esc cancel"));
    assert!(rows[2].chars().all(|c| c == '─'));
    assert!(rows[3].starts_with("→ "));
    assert!(rows[4].contains("file-1"));
    assert_eq!(rows[5], "");
    assert!(rows[9].contains("q quit"));
    assert!(rows[9].ends_with("2 items"));
    assert!(rows.iter().all(|row| visible_width(row) <= 80));
}

#[test]
fn selection_scrolls_into_view() {
    let mut screen = Screen::new(80, 10);
    render(&listing(10, 9), &mut screen).unwrap();
    assert_eq!(screen.body_capacity(), 5);

    let rows = plain(&screen);
    assert!(rows[3].contains("file-5"));
    assert!(rows[7].starts_with("→ "));
    assert!(rows[7].contains("file-9"));
    assert!(rows[7].ends_with("1.00 KB  -"));
}

#[test]
fn narrow_frames_truncate_every_row() {
    let mut screen = Screen::new(24, 8);
    render(&listing(3, 1), &mut screen).unwrap();
    for row in plain(&screen) {
        assert!(visible_width(&row) <= 24, "{row:?}");
    }
}

#[test]
fn empty_state_replaces_table() {
    let mut view = listing(0, 0);
    view.empty_state = Some(EmptyState::no_matches("zzz"));
    let mut screen = Screen::new(60, 12);
    render(&view, &mut screen).unwrap();

    let rows = plain(&screen);
    assert!(rows.iter().any(|row| row.trim() == "No matches"));
    assert!(rows.iter().any(|row| row.trim() == "Nothing matches \"zzz\""));
}

#[test]
fn cursor_lands_in_search_field() {
    let mut view = listing(1, 0);
    view.search = Some(SearchBarInfo {
        query: "abc".to_string(),
        cursor: Some(1),
    });
    let mut screen = Screen::new(60, 8);
    render(&view, &mut screen).unwrap();

    let frame = screen.render().unwrap();
    assert!(frame.starts_with(ansi::HOME));
    // Second row, after "Search: " and one query character.
    assert!(frame.ends_with(&ansi::move_to(2, 10)));
}

#[test]
fn rerender_reuses_screen() {
    let mut screen = Screen::new(60, 8);
    render(&listing(3, 0), &mut screen).unwrap();
    render(&listing(1, 0), &mut screen).unwrap();
    assert_eq!(screen.header.len(), 3);
    assert_eq!(screen.body.len(), 1);
    assert_eq!(screen.footer.len(), 2);
}

#[test]
fn second_input_line_is_a_usage_error() {
    let mut screen = Screen::new(60, 8);
    render(&listing(1, 0), &mut screen).unwrap();
    let err = screen.input("again", "", None).unwrap_err();
    assert!(matches!(err, BetterS3Error::DuplicateInput { existing_row: 1 }));
    assert!(err.is_usage_error());
}

#[test]
fn manual_layout_matches_documented_rows() {
    let mut screen = Screen::new(20, 4);
    screen.header.add_line().left().write("Buckets");
    screen.body.add_line().left().write("photos");
    screen.footer.add_line().right().write("q quit");

    let rows = screen.rows().unwrap();
    assert_eq!(rows, vec!["Buckets", "photos", "", "              q quit"]);
}
