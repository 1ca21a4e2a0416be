//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::controller::ProfileController;

use super::state::{AppState, PopupState};
use super::widgets::{
    render_footer, render_form, render_header, render_help, render_quit_confirm,
    render_swipe_menu,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState, controller: &ProfileController) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(3),    // Form
        Constraint::Length(1), // Footer
    ])
    .split(area);

    render_header(frame, chunks[0], controller);
    render_form(frame, chunks[1], state, controller.form());
    render_footer(frame, chunks[2], state, controller);

    // Popups last so they overlay everything
    match state.popup.clone() {
        PopupState::None => {}
        PopupState::Help => render_help(frame, area),
        PopupState::Swipe { path, selected, .. } => {
            render_swipe_menu(frame, area, controller.form(), path, selected)
        }
        PopupState::QuitConfirm => render_quit_confirm(frame, area),
    }
}
