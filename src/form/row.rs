//! Rows: one cell plus display state, selection handler and swipe actions.

use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::cell::{Cell, LabelCell, PurchaseSummaryCell, TwoColumnCell};
use crate::model::{ColumnContent, PurchaseHistoryContent};
use crate::style::Stylable;

static NEXT_ROW_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a row, stable for the row's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

impl RowId {
    fn next() -> Self {
        Self(NEXT_ROW_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Per-row display state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowState {
    pub selected: bool,
    pub disabled: bool,
    pub hidden: bool,
}

/// Callback run when a row is selected.
pub type RowHandler = Rc<dyn Fn(&Row)>;

/// Visual weight of a swipe action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeStyle {
    Normal,
    Destructive,
}

/// Contextual action exposed by swiping a row.
#[derive(Clone)]
pub struct SwipeAction {
    pub title: String,
    pub style: SwipeStyle,
    /// Returns whether the action completed.
    pub handler: Rc<dyn Fn(&Row) -> bool>,
}

impl SwipeAction {
    pub fn new(
        style: SwipeStyle,
        title: impl Into<String>,
        handler: impl Fn(&Row) -> bool + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            style,
            handler: Rc::new(handler),
        }
    }
}

impl fmt::Debug for SwipeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeAction")
            .field("title", &self.title)
            .field("style", &self.style)
            .finish()
    }
}

/// One renderable unit of a form.
pub struct Row {
    id: RowId,
    pub tag: Option<String>,
    pub state: RowState,
    cell: Box<dyn Cell>,
    inline_parent: Option<RowId>,
    expanded: bool,
    on_select: Option<RowHandler>,
    pub trailing_swipe: Vec<SwipeAction>,
}

impl Row {
    pub fn new(cell: impl Cell + 'static) -> Self {
        Self::from_boxed(Box::new(cell))
    }

    pub fn from_boxed(cell: Box<dyn Cell>) -> Self {
        Self {
            id: RowId::next(),
            tag: None,
            state: RowState::default(),
            cell,
            inline_parent: None,
            expanded: false,
            on_select: None,
            trailing_swipe: Vec::new(),
        }
    }

    /// Label row with a title and an optional accessory value.
    pub fn label(title: impl Into<String>, value: Option<&str>) -> Self {
        Self::new(LabelCell::new(title, value.map(str::to_string)))
    }

    pub fn two_column(contents: Vec<ColumnContent>) -> Self {
        Self::new(TwoColumnCell::new(contents))
    }

    /// Expandable purchase summary row.
    pub fn purchase_history(content: PurchaseHistoryContent) -> Self {
        Self::new(PurchaseSummaryCell::new(content))
    }

    pub(super) fn inline_of(parent: RowId, cell: Box<dyn Cell>) -> Self {
        let mut row = Self::from_boxed(cell);
        row.inline_parent = Some(parent);
        row
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn on_cell_selection(mut self, handler: impl Fn(&Row) + 'static) -> Self {
        self.on_select = Some(Rc::new(handler));
        self
    }

    pub fn with_trailing_swipe(mut self, actions: Vec<SwipeAction>) -> Self {
        self.trailing_swipe = actions;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.state.disabled = disabled;
        self
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn cell(&self) -> &dyn Cell {
        self.cell.as_ref()
    }

    pub fn cell_mut(&mut self) -> &mut dyn Cell {
        self.cell.as_mut()
    }

    /// Downcasts the cell to a concrete type.
    pub fn cell_as<C: Cell + 'static>(&self) -> Option<&C> {
        self.cell.as_any().downcast_ref::<C>()
    }

    /// The stylable capability of this row's cell, if any.
    pub fn as_stylable(&mut self) -> Option<&mut dyn Stylable> {
        self.cell.as_stylable()
    }

    /// Parent row when this row is an inline detail row.
    pub fn inline_parent(&self) -> Option<RowId> {
        self.inline_parent
    }

    /// Whether this row currently shows its inline row.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub(super) fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
        self.cell.inline_toggled(expanded);
    }

    pub(super) fn select_handler(&self) -> Option<RowHandler> {
        self.on_select.clone()
    }

    pub fn is_disabled(&self) -> bool {
        self.state.disabled
    }

    pub fn is_hidden(&self) -> bool {
        self.state.hidden
    }
}

impl fmt::Debug for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row")
            .field("id", &self.id)
            .field("tag", &self.tag)
            .field("state", &self.state)
            .field("inline_parent", &self.inline_parent)
            .field("expanded", &self.expanded)
            .field("trailing_swipe", &self.trailing_swipe)
            .finish_non_exhaustive()
    }
}
