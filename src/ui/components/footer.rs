//! Footer component: key hints and status message.

use crate::ui::screen::Screen;
use crate::ui::text::Style;
use crate::ui::viewmodel::{FooterInfo, StatusMessage};

/// Separator between key hints.
const HINT_SEPARATOR: &str = "  ";

/// Appends a divider and the hint line to the screen footer.
///
/// # Layout
///
/// ```text
/// ────────────────────────────────────────────────────────────
/// ↑↓ navigate  enter open  / search                Downloaded
/// ```
///
/// Keys are drawn in the hint color and actions dimmed. A status message is
/// right-aligned: errors in the accent color, everything else highlighted.
pub fn render_footer(screen: &mut Screen, footer: &FooterInfo) {
    screen.footer.divider();
    let line = screen.footer.add_line();

    let left = line.left();
    for (idx, (key, action)) in footer.keybindings.iter().enumerate() {
        if idx > 0 {
            left.write(HINT_SEPARATOR);
        }
        left.write_styled(key.as_str(), Style::Hint)
            .write(" ")
            .write_dim(action.as_str());
    }

    match &footer.status {
        Some(StatusMessage::Info(message)) => {
            line.right().write_highlight(message.as_str());
        }
        Some(StatusMessage::Error(message)) => {
            line.right().write_accent(message.as_str());
        }
        None => {}
    }
}
