//! Cell variants: what a row renders and how it takes a stylist.
//!
//! Every row owns one boxed [`Cell`]. Cells keep their typed value
//! separately from the labels they display; [`Cell::update`] copies the
//! value into the labels, the same way a cell is refreshed when it becomes
//! visible.

mod label;
mod purchase;
mod purchase_details;
mod two_column;

pub use label::LabelCell;
pub use purchase::PurchaseSummaryCell;
pub use purchase_details::{ProductView, PurchaseDetailsCell};
pub use two_column::TwoColumnCell;

use std::any::Any;

use ratatui::text::Line;

use crate::style::Stylable;

/// Rendering half of a row.
///
/// The trait is object-safe and designed to be used with `Box<dyn Cell>`.
pub trait Cell {
    /// Copies the cell's value into its visible elements.
    fn update(&mut self) {}

    /// Renders the cell into terminal lines for the given width.
    fn lines(&self, width: u16) -> Vec<Line<'static>>;

    /// Returns the stylable capability if this cell has one.
    fn as_stylable(&mut self) -> Option<&mut dyn Stylable> {
        None
    }

    /// Cell of the detail row this cell reveals when expanded.
    ///
    /// `None` for cells that cannot expand inline.
    fn inline_cell(&self) -> Option<Box<dyn Cell>> {
        None
    }

    /// Told when its inline row was materialized or removed.
    fn inline_toggled(&mut self, _expanded: bool) {}

    /// Whether a selection should leave the row selected.
    fn keeps_selection(&self) -> bool {
        true
    }

    fn as_any(&self) -> &dyn Any;
}
