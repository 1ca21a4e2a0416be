//! TUI widgets for the profile screen.

mod footer;
mod form_list;
mod header;
mod help;
mod quit_confirm;
mod swipe_menu;

pub use footer::render_footer;
pub use form_list::render_form;
pub use header::render_header;
pub use help::render_help;
pub use quit_confirm::render_quit_confirm;
pub use swipe_menu::render_swipe_menu;

use ratatui::layout::Rect;

/// Centers a popup of at most `width` x `height` inside `area`.
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
