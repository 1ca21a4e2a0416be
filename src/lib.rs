//! profile-form - customer profile screen built on a row/section form.
//!
//! The form engine lives in [`form`], cell variants in [`cell`] and the
//! shared fonts and colors in [`style`]. [`controller`] turns a customer
//! view model into sections and styles every inserted row, and [`tui`]
//! puts the whole thing on a terminal.

pub mod cell;
pub mod controller;
pub mod form;
pub mod model;
pub mod schedule;
pub mod style;
pub mod tui;
