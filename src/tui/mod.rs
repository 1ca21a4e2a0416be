//! Terminal user interface for the customer profile form.
//!
//! The form is drawn as a scrolling list of rows. A timer tick drains the
//! main queue, which is how the delayed population reaches the screen.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use input::KeyAction;
pub use state::{AppState, PopupState};
