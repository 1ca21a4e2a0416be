//! Main application state.

use ratatui::widgets::ListState;

use crate::form::{Form, IndexPath, RowId};

/// Popup overlay state. Only one popup can be open at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    #[default]
    None,
    Help,
    /// Swipe actions of the row at `path`.
    Swipe {
        path: IndexPath,
        selected: usize,
        count: usize,
    },
    QuitConfirm,
}

/// Main application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Index of the cursor among visible rows.
    pub selected: usize,
    /// Row the cursor follows across form rebuilds and inline toggles.
    pub tracked_id: Option<RowId>,
    /// Active popup.
    pub popup: PopupState,
    /// Temporary status message shown in the footer.
    pub status_message: Option<String>,
    /// Ratatui list state (enables auto-scrolling).
    pub list_state: ListState,
    /// Terminal width, refreshed on resize.
    pub terminal_width: u16,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn any_popup_open(&self) -> bool {
        self.popup != PopupState::None
    }

    /// Re-anchors the cursor on the tracked row, or clamps it when that row
    /// is gone. Always re-tracks the row under the cursor.
    pub fn resolve_selection(&mut self, form: &Form) {
        let ids: Vec<RowId> = form
            .visible_paths()
            .into_iter()
            .filter_map(|path| form.row(path).map(|row| row.id()))
            .collect();
        let len = ids.len();
        if len == 0 {
            self.selected = 0;
            self.tracked_id = None;
            return;
        }

        if let Some(tid) = self.tracked_id {
            if let Some(pos) = ids.iter().position(|&id| id == tid) {
                self.selected = pos;
            } else {
                self.tracked_id = None;
                if self.selected >= len {
                    self.selected = len - 1;
                }
            }
        } else if self.selected >= len {
            self.selected = len - 1;
        }

        if let Some(&id) = ids.get(self.selected) {
            self.tracked_id = Some(id);
        }
    }

    /// Form position under the cursor.
    pub fn current_path(&self, form: &Form) -> Option<IndexPath> {
        form.visible_paths().get(self.selected).copied()
    }

    /// Moves the cursor up by `n` rows and stops following the tracked row.
    pub fn cursor_up(&mut self, n: usize) {
        self.selected = self.selected.saturating_sub(n);
        self.tracked_id = None;
    }

    /// Moves the cursor down by `n` rows. Clamped by `resolve_selection`.
    pub fn cursor_down(&mut self, n: usize) {
        self.selected = self.selected.saturating_add(n);
        self.tracked_id = None;
    }

    pub fn cursor_home(&mut self) {
        self.cursor_up(usize::MAX);
    }

    pub fn cursor_end(&mut self) {
        self.cursor_down(usize::MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{NoopDelegate, Row, Section};

    fn form(rows: usize) -> Form {
        let mut form = Form::new();
        let mut section = Section::new();
        for i in 0..rows {
            section.push(Row::label(format!("row {}", i), None));
        }
        form.append_section(section, &mut NoopDelegate);
        form
    }

    #[test]
    fn test_end_clamps_to_last_row() {
        let form = form(3);
        let mut state = AppState::new();
        state.cursor_end();
        state.resolve_selection(&form);
        assert_eq!(state.selected, 2);
        assert_eq!(state.current_path(&form), Some(IndexPath::new(0, 2)));
    }

    #[test]
    fn test_cursor_follows_tracked_row() {
        let mut form = form(3);
        let mut state = AppState::new();
        state.cursor_down(1);
        state.resolve_selection(&form);
        let tracked = state.tracked_id;
        assert_eq!(state.selected, 1);

        form.insert_row(IndexPath::new(0, 0), Row::label("new", None), &mut NoopDelegate)
            .unwrap();
        state.resolve_selection(&form);
        assert_eq!(state.selected, 2);
        assert_eq!(state.tracked_id, tracked);
    }

    #[test]
    fn test_empty_form_resets_cursor() {
        let form = Form::new();
        let mut state = AppState::new();
        state.cursor_down(5);
        state.resolve_selection(&form);
        assert_eq!(state.selected, 0);
        assert_eq!(state.tracked_id, None);
        assert_eq!(state.current_path(&form), None);
    }
}
