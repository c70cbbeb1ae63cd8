//! Header component: title bar with the current location.

use crate::ui::helpers::{self, OPEN_FOLDER_ICON};
use crate::ui::screen::Screen;
use crate::ui::text::Style;
use crate::ui::viewmodel::HeaderInfo;

/// Appends the title bar to the screen header.
///
/// # Layout
///
/// ```text
/// 📂 TITLE                                  s3://bucket/prefix/
/// ```
///
/// The divider under the header is drawn by the renderer once the optional
/// search line has been added.
///
/// The location is right-aligned, so on narrow terminals it is truncated from
/// the start and the deepest part of the path stays visible.
pub fn render_header(screen: &mut Screen, header: &HeaderInfo) {
    let line = screen.header.add_line();
    line.left()
        .push(helpers::emoji(OPEN_FOLDER_ICON))
        .write(" ")
        .write_styled(header.title.as_str(), Style::Header);
    if !header.location.is_empty() {
        line.right().write_muted(header.location.as_str());
    }
}
