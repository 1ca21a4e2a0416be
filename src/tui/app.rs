//! Main TUI application.

use std::cell::{Ref, RefCell};
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture, KeyEvent};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};
use tracing::debug;

use crate::controller::ProfileController;
use crate::form::IndexPath;
use crate::schedule::MainQueue;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::{AppState, PopupState};

/// Main TUI application.
pub struct App {
    controller: Rc<RefCell<ProfileController>>,
    queue: MainQueue,
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates a new App around a controller and the queue its delayed work
    /// was scheduled on.
    pub fn new(controller: Rc<RefCell<ProfileController>>, queue: MainQueue) -> Self {
        Self {
            controller,
            queue,
            state: AppState::new(),
            should_quit: false,
        }
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(tick_rate);

        if let Ok(size) = terminal.size() {
            self.state.terminal_width = size.width;
        }

        // Main loop
        loop {
            terminal.draw(|frame| self.draw(frame))?;

            match events.next() {
                Ok(Event::Tick) => self.on_tick(Instant::now()),
                Ok(Event::Key(key)) => self.on_key(key),
                Ok(Event::Resize(width)) => self.state.terminal_width = width,
                Err(_) => self.should_quit = true,
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Runs queued work that is due and re-anchors the cursor.
    pub fn on_tick(&mut self, now: Instant) {
        let ran = self.queue.run_due(now);
        if ran > 0 {
            debug!(tasks = ran, "ran queued tasks");
        }
        self.state.resolve_selection(self.controller.borrow().form());
    }

    /// Handles one key press.
    pub fn on_key(&mut self, key: KeyEvent) {
        match handle_key(&mut self.state, key) {
            KeyAction::None => {}
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Select => {
                if let Some(path) = self.cursor() {
                    let result = self.controller.borrow_mut().select(path);
                    match result {
                        Ok(outcome) => debug!(?path, ?outcome, "row selected"),
                        Err(e) => debug!(?path, error = %e, "select failed"),
                    }
                }
            }
            KeyAction::ToggleInline => {
                if let Some(path) = self.cursor() {
                    let result = self.controller.borrow_mut().toggle_inline(path);
                    match result {
                        Ok(toggle) => debug!(?path, ?toggle, "inline toggled"),
                        Err(e) => debug!(?path, error = %e, "inline toggle failed"),
                    }
                }
            }
            KeyAction::OpenSwipe => self.open_swipe(),
            KeyAction::Swipe(index) => {
                if let Some(path) = self.cursor() {
                    let result = self.controller.borrow().trigger_swipe(path, index);
                    match result {
                        Ok(done) => debug!(?path, index, done, "swipe action"),
                        Err(e) => debug!(?path, index, error = %e, "swipe action failed"),
                    }
                }
            }
        }
        self.state.resolve_selection(self.controller.borrow().form());
    }

    fn open_swipe(&mut self) {
        let count = self.cursor().and_then(|path| {
            let controller = self.controller.borrow();
            let count = controller
                .form()
                .row(path)
                .map(|row| (path, row.trailing_swipe.len()));
            count
        });
        match count {
            Some((path, count)) if count > 0 => {
                self.state.popup = PopupState::Swipe {
                    path,
                    selected: 0,
                    count,
                };
            }
            _ => self.state.status_message = Some("No actions on this row".to_string()),
        }
    }

    fn cursor(&self) -> Option<IndexPath> {
        self.state.current_path(self.controller.borrow().form())
    }

    /// Draws the current screen.
    pub fn draw(&mut self, frame: &mut Frame) {
        let controller = self.controller.borrow();
        render(frame, &mut self.state, &controller);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn controller(&self) -> Ref<'_, ProfileController> {
        self.controller.borrow()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
