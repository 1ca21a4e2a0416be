//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, PopupState};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Select the row under the cursor.
    Select,
    /// Press the expand control of the row under the cursor.
    ToggleInline,
    /// Open the swipe actions of the row under the cursor.
    OpenSwipe,
    /// Run the swipe action with this index.
    Swipe(usize),
}

/// Navigation action for unified scroll/selection dispatch.
enum NavAction {
    Up,
    Down,
    PageUp(usize),
    PageDown(usize),
    Home,
    End,
}

fn dispatch_navigation(state: &mut AppState, action: NavAction) {
    match &mut state.popup {
        PopupState::Swipe {
            selected, count, ..
        } => {
            let last = count.saturating_sub(1);
            match action {
                NavAction::Up => *selected = selected.saturating_sub(1),
                NavAction::Down => *selected = (*selected + 1).min(last),
                NavAction::PageUp(_) | NavAction::Home => *selected = 0,
                NavAction::PageDown(_) | NavAction::End => *selected = last,
            }
        }
        PopupState::Help | PopupState::QuitConfirm => {}
        PopupState::None => match action {
            NavAction::Up => state.cursor_up(1),
            NavAction::Down => state.cursor_down(1),
            NavAction::PageUp(n) => state.cursor_up(n),
            NavAction::PageDown(n) => state.cursor_down(n),
            NavAction::Home => state.cursor_home(),
            NavAction::End => state.cursor_end(),
        },
    }
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }
    match state.popup {
        PopupState::QuitConfirm => handle_quit_confirm(state, key),
        PopupState::Help => handle_help(state, key),
        PopupState::Swipe { selected, .. } => handle_swipe(state, key, selected),
        PopupState::None => handle_normal_mode(state, key),
    }
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.popup = PopupState::None;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_help(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('q')
    ) {
        state.popup = PopupState::None;
    }
    KeyAction::None
}

fn handle_swipe(state: &mut AppState, key: KeyEvent, selected: usize) -> KeyAction {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            dispatch_navigation(state, NavAction::Up);
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            dispatch_navigation(state, NavAction::Down);
            KeyAction::None
        }
        KeyCode::Enter => {
            state.popup = PopupState::None;
            KeyAction::Swipe(selected)
        }
        KeyCode::Esc | KeyCode::Right | KeyCode::Char('q') => {
            state.popup = PopupState::None;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    state.status_message = None;
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
            KeyAction::None
        }
        KeyCode::Char('?') | KeyCode::Char('h') => {
            state.popup = PopupState::Help;
            KeyAction::None
        }

        // Row navigation
        KeyCode::Up | KeyCode::Char('k') => {
            dispatch_navigation(state, NavAction::Up);
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            dispatch_navigation(state, NavAction::Down);
            KeyAction::None
        }
        KeyCode::PageUp => {
            dispatch_navigation(state, NavAction::PageUp(10));
            KeyAction::None
        }
        KeyCode::PageDown => {
            dispatch_navigation(state, NavAction::PageDown(10));
            KeyAction::None
        }
        KeyCode::Home => {
            dispatch_navigation(state, NavAction::Home);
            KeyAction::None
        }
        KeyCode::End => {
            dispatch_navigation(state, NavAction::End);
            KeyAction::None
        }

        // Row interaction
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Select,
        KeyCode::Char('+') | KeyCode::Char('-') | KeyCode::Char('e') => KeyAction::ToggleInline,
        KeyCode::Left | KeyCode::Char('s') => KeyAction::OpenSwipe,

        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::IndexPath;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_needs_confirmation() {
        let mut state = AppState::new();
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('q'))), KeyAction::None);
        assert_eq!(state.popup, PopupState::QuitConfirm);
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), KeyAction::None);
        assert_eq!(state.popup, PopupState::None);

        handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), KeyAction::Quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let mut state = AppState::new();
        state.popup = PopupState::Help;
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut state, ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_row_keys() {
        let mut state = AppState::new();
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), KeyAction::Select);
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('+'))), KeyAction::ToggleInline);
        assert_eq!(handle_key(&mut state, key(KeyCode::Left)), KeyAction::OpenSwipe);

        handle_key(&mut state, key(KeyCode::Down));
        handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.selected, 2);
        handle_key(&mut state, key(KeyCode::Home));
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_swipe_menu_navigation_is_bounded() {
        let mut state = AppState::new();
        state.popup = PopupState::Swipe {
            path: IndexPath::new(1, 1),
            selected: 0,
            count: 2,
        };
        for _ in 0..3 {
            handle_key(&mut state, key(KeyCode::Down));
        }
        assert!(matches!(state.popup, PopupState::Swipe { selected: 1, .. }));
        assert_eq!(state.selected, 0);

        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), KeyAction::Swipe(1));
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn test_help_popup_swallows_keys() {
        let mut state = AppState::new();
        handle_key(&mut state, key(KeyCode::Char('?')));
        assert_eq!(state.popup, PopupState::Help);
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), KeyAction::None);
        handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.popup, PopupState::None);
    }
}
