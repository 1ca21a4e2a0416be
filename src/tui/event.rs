//! Terminal events and timer ticks.
//!
//! A helper thread polls crossterm and forwards plain values over a channel.
//! Form state never leaves the main thread.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Application events.
#[derive(Debug, PartialEq, Eq)]
pub enum Event {
    /// Timer tick, drains the main queue.
    Tick,
    Key(KeyEvent),
    /// Terminal resize (new width).
    Resize(u16),
}

/// Maps a crossterm event to an application event. Key releases, mouse and
/// focus events are dropped.
fn translate(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key(key)),
        CrosstermEvent::Resize(width, _) => Some(Event::Resize(width)),
        _ => None,
    }
}

/// Polls the terminal until the receiving side hangs up. A quiet poll
/// interval becomes a tick.
fn pump(tx: Sender<Event>, tick_rate: Duration) {
    loop {
        let next = match event::poll(tick_rate) {
            Ok(true) => match event::read() {
                Ok(raw) => translate(raw),
                Err(_) => None,
            },
            _ => Some(Event::Tick),
        };
        if let Some(event) = next {
            if tx.send(event).is_err() {
                return;
            }
        }
    }
}

/// Event source for the main loop.
pub struct EventHandler {
    rx: Receiver<Event>,
    /// Keeps the channel open while the handler lives.
    _tx: Sender<Event>,
}

impl EventHandler {
    /// Starts the polling thread with the given tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let pump_tx = tx.clone();
        thread::spawn(move || pump(pump_tx, tick_rate));
        Self { rx, _tx: tx }
    }

    /// Blocks until the next event.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}
