//! Empty state component renderer.

use crate::ui::screen::Screen;
use crate::ui::viewmodel::EmptyState;

/// Blank rows above the message.
const TOP_MARGIN: usize = 2;

/// Appends a centered two-line message to the screen body.
///
/// # Layout
///
/// ```text
/// [TOP_MARGIN blank lines]
///                     MESSAGE
///                  subtitle text
/// ```
pub fn render_empty_state(screen: &mut Screen, empty: &EmptyState) {
    for _ in 0..TOP_MARGIN {
        screen.body.add_line();
    }
    screen.body.add_line().center().write_bold(empty.message.as_str());
    if !empty.subtitle.is_empty() {
        screen.body.add_line().center().write_dim(empty.subtitle.as_str());
    }
}
