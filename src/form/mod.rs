//! Minimal form engine: sections of rows, insertion notifications and
//! inline rows.
//!
//! Every mutation that inserts rows or sections reports them synchronously
//! to a [`FormDelegate`] before the inserted cells are updated, so the
//! delegate can prepare cells (for example, style them) before they show
//! their content.

mod row;

pub use row::{Row, RowHandler, RowId, RowState, SwipeAction, SwipeStyle};

use tracing::debug;

/// Position of a row in a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

/// Error types returned by positional form operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// No section at this index.
    SectionOutOfRange(usize),
    /// No row at this path.
    RowOutOfRange(IndexPath),
    /// Swipe action index past the row's actions.
    ActionOutOfRange(IndexPath, usize),
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::SectionOutOfRange(s) => write!(f, "no section {}", s),
            FormError::RowOutOfRange(p) => write!(f, "no row {} in section {}", p.row, p.section),
            FormError::ActionOutOfRange(p, i) => write!(
                f,
                "no swipe action {} on row {} in section {}",
                i, p.row, p.section
            ),
        }
    }
}

impl std::error::Error for FormError {}

/// Receiver of insertion notifications.
pub trait FormDelegate {
    fn rows_inserted(&mut self, rows: &mut [Row], at: &[IndexPath]);

    fn sections_inserted(&mut self, sections: &mut [Section], at: &[usize]);
}

/// Delegate that ignores every notification.
#[derive(Debug, Default)]
pub struct NoopDelegate;

impl FormDelegate for NoopDelegate {
    fn rows_inserted(&mut self, _rows: &mut [Row], _at: &[IndexPath]) {}

    fn sections_inserted(&mut self, _sections: &mut [Section], _at: &[usize]) {}
}

/// Ordered group of rows.
#[derive(Debug, Default)]
pub struct Section {
    rows: Vec<Row>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Result of toggling an inline row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineToggle {
    Expanded,
    Collapsed,
    /// The row has no inline row to show.
    NotInline,
    /// The row is disabled.
    Ignored,
}

/// Result of selecting a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected,
    Expanded,
    Collapsed,
    /// The row is disabled.
    Ignored,
}

/// Ordered sections of rows.
#[derive(Debug, Default)]
pub struct Form {
    sections: Vec<Section>,
    revision: u64,
    batch_depth: u32,
    pending: bool,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    /// Counter bumped once per visible change (or once per batch).
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether a no-animation batch is in progress.
    pub fn is_batching(&self) -> bool {
        self.batch_depth > 0
    }

    fn touch(&mut self) {
        if self.batch_depth > 0 {
            self.pending = true;
        } else {
            self.revision += 1;
        }
    }

    /// Runs `f` as one non-animated update: every change made inside is
    /// published as a single revision.
    pub fn perform_without_animation<R>(&mut self, f: impl FnOnce(&mut Form) -> R) -> R {
        self.batch_depth += 1;
        let result = f(self);
        self.batch_depth -= 1;
        if self.batch_depth == 0 && self.pending {
            self.pending = false;
            self.revision += 1;
        }
        result
    }

    pub fn row(&self, path: IndexPath) -> Option<&Row> {
        self.sections.get(path.section)?.rows.get(path.row)
    }

    pub fn row_mut(&mut self, path: IndexPath) -> Option<&mut Row> {
        self.sections.get_mut(path.section)?.rows.get_mut(path.row)
    }

    fn checked_row_mut(&mut self, path: IndexPath) -> Result<&mut Row, FormError> {
        self.row_mut(path).ok_or(FormError::RowOutOfRange(path))
    }

    /// All rows with their positions, in display order.
    pub fn rows(&self) -> impl Iterator<Item = (IndexPath, &Row)> {
        self.sections.iter().enumerate().flat_map(|(s, section)| {
            section
                .rows
                .iter()
                .enumerate()
                .map(move |(r, row)| (IndexPath::new(s, r), row))
        })
    }

    /// Positions of rows that are not hidden.
    pub fn visible_paths(&self) -> Vec<IndexPath> {
        self.rows()
            .filter(|(_, row)| !row.is_hidden())
            .map(|(path, _)| path)
            .collect()
    }

    pub fn position_of(&self, id: RowId) -> Option<IndexPath> {
        self.rows()
            .find(|(_, row)| row.id() == id)
            .map(|(path, _)| path)
    }

    pub fn row_by_tag(&self, tag: &str) -> Option<&Row> {
        self.rows()
            .map(|(_, row)| row)
            .find(|row| row.tag.as_deref() == Some(tag))
    }

    /// Removes every section and row.
    pub fn remove_all(&mut self) {
        if self.sections.is_empty() {
            return;
        }
        self.sections.clear();
        self.touch();
    }

    /// Appends a section and returns its index.
    pub fn append_section(&mut self, section: Section, delegate: &mut dyn FormDelegate) -> usize {
        let index = self.sections.len();
        self.sections.push(section);
        delegate.sections_inserted(&mut self.sections[index..], &[index]);
        for row in &mut self.sections[index].rows {
            row.cell_mut().update();
        }
        self.touch();
        index
    }

    /// Appends a row to the end of a section.
    pub fn append_row(
        &mut self,
        section: usize,
        row: Row,
        delegate: &mut dyn FormDelegate,
    ) -> Result<IndexPath, FormError> {
        let len = self
            .sections
            .get(section)
            .ok_or(FormError::SectionOutOfRange(section))?
            .len();
        let path = IndexPath::new(section, len);
        self.insert_row(path, row, delegate)?;
        Ok(path)
    }

    /// Inserts a row at `path`, shifting later rows down.
    pub fn insert_row(
        &mut self,
        path: IndexPath,
        row: Row,
        delegate: &mut dyn FormDelegate,
    ) -> Result<(), FormError> {
        let section = self
            .sections
            .get_mut(path.section)
            .ok_or(FormError::SectionOutOfRange(path.section))?;
        if path.row > section.rows.len() {
            return Err(FormError::RowOutOfRange(path));
        }
        section.rows.insert(path.row, row);
        delegate.rows_inserted(&mut section.rows[path.row..=path.row], &[path]);
        section.rows[path.row].cell_mut().update();
        self.touch();
        Ok(())
    }

    /// Removes the row at `path`, together with its inline row if expanded.
    /// Removing an inline row collapses its parent.
    pub fn remove_row(&mut self, path: IndexPath) -> Result<Row, FormError> {
        let section = self
            .sections
            .get_mut(path.section)
            .ok_or(FormError::SectionOutOfRange(path.section))?;
        if path.row >= section.rows.len() {
            return Err(FormError::RowOutOfRange(path));
        }
        let removed = section.rows.remove(path.row);
        if removed.is_expanded() {
            let id = removed.id();
            section.rows.retain(|row| row.inline_parent() != Some(id));
        }
        if let Some(parent) = removed.inline_parent() {
            if let Some(row) = section.rows.iter_mut().find(|row| row.id() == parent) {
                row.set_expanded(false);
            }
        }
        self.touch();
        Ok(removed)
    }

    /// Selects a row: runs its handler, then toggles its inline row if it
    /// has one. Disabled rows ignore selection.
    pub fn select(
        &mut self,
        path: IndexPath,
        delegate: &mut dyn FormDelegate,
    ) -> Result<SelectOutcome, FormError> {
        if self.checked_row_mut(path)?.is_disabled() {
            debug!(section = path.section, row = path.row, "selection on disabled row ignored");
            return Ok(SelectOutcome::Ignored);
        }

        for section in &mut self.sections {
            for row in &mut section.rows {
                row.state.selected = false;
            }
        }
        let row = self.checked_row_mut(path)?;
        row.state.selected = row.cell().keeps_selection();
        if let Some(handler) = row.select_handler() {
            handler(&*row);
        }

        Ok(match self.toggle_inline(path, delegate)? {
            InlineToggle::Expanded => SelectOutcome::Expanded,
            InlineToggle::Collapsed => SelectOutcome::Collapsed,
            InlineToggle::NotInline | InlineToggle::Ignored => SelectOutcome::Selected,
        })
    }

    /// Shows or hides the inline row of the row at `path`.
    pub fn toggle_inline(
        &mut self,
        path: IndexPath,
        delegate: &mut dyn FormDelegate,
    ) -> Result<InlineToggle, FormError> {
        let row = self.checked_row_mut(path)?;
        if row.is_disabled() {
            return Ok(InlineToggle::Ignored);
        }
        let parent = row.id();

        if row.is_expanded() {
            row.set_expanded(false);
            let rows = &mut self.sections[path.section].rows;
            rows.retain(|r| r.inline_parent() != Some(parent));
            self.touch();
            return Ok(InlineToggle::Collapsed);
        }

        let Some(cell) = row.cell().inline_cell() else {
            return Ok(InlineToggle::NotInline);
        };
        row.set_expanded(true);

        let at = IndexPath::new(path.section, path.row + 1);
        let rows = &mut self.sections[path.section].rows;
        rows.insert(at.row, Row::inline_of(parent, cell));
        delegate.rows_inserted(&mut rows[at.row..=at.row], &[at]);
        rows[at.row].cell_mut().update();
        self.touch();
        Ok(InlineToggle::Expanded)
    }

    /// Runs the `index`-th trailing swipe action of the row at `path`.
    pub fn trigger_swipe(&self, path: IndexPath, index: usize) -> Result<bool, FormError> {
        let row = self.row(path).ok_or(FormError::RowOutOfRange(path))?;
        let action = row
            .trailing_swipe
            .get(index)
            .ok_or(FormError::ActionOutOfRange(path, index))?;
        Ok((action.handler)(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{LabelCell, PurchaseSummaryCell};
    use crate::model::{Product, PurchaseHistoryContent};
    use std::cell::Cell as Counter;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder {
        rows: Vec<Vec<IndexPath>>,
        sections: Vec<Vec<usize>>,
    }

    impl FormDelegate for Recorder {
        fn rows_inserted(&mut self, rows: &mut [Row], at: &[IndexPath]) {
            assert_eq!(rows.len(), at.len());
            self.rows.push(at.to_vec());
        }

        fn sections_inserted(&mut self, sections: &mut [Section], at: &[usize]) {
            assert_eq!(sections.len(), at.len());
            self.sections.push(at.to_vec());
        }
    }

    fn purchase(products: usize) -> PurchaseHistoryContent {
        PurchaseHistoryContent {
            date: "12/12/2012".to_string(),
            total_price: "1000.0€".to_string(),
            store: "There".to_string(),
            products: (0..products)
                .map(|i| Product::new(format!("P{}", i), "1€", "D"))
                .collect(),
        }
    }

    fn purchase_form(delegate: &mut dyn FormDelegate) -> Form {
        let mut form = Form::new();
        form.append_section(
            Section::new()
                .with_row(Row::label("HISTORY", None))
                .with_row(Row::purchase_history(purchase(2)))
                .with_row(Row::label("AFTER", None)),
            delegate,
        );
        form
    }

    #[test]
    fn test_append_notifies_and_updates() {
        let mut rec = Recorder::default();
        let mut form = Form::new();
        let s = form.append_section(Section::new().with_row(Row::label("A", Some("B"))), &mut rec);
        let path = form.append_row(s, Row::label("C", None), &mut rec).unwrap();

        assert_eq!(rec.sections, vec![vec![0]]);
        assert_eq!(rec.rows, vec![vec![IndexPath::new(0, 1)]]);
        assert_eq!(path, IndexPath::new(0, 1));
        let cell = form.row(IndexPath::new(0, 0)).unwrap().cell_as::<LabelCell>().unwrap();
        assert_eq!(cell.title.text(), "A");
        assert_eq!(cell.detail.text(), "B");
    }

    #[test]
    fn test_positional_errors() {
        let mut form = Form::new();
        let err = form.append_row(3, Row::label("A", None), &mut NoopDelegate).unwrap_err();
        assert_eq!(err, FormError::SectionOutOfRange(3));

        form.append_section(Section::new(), &mut NoopDelegate);
        let err = form
            .insert_row(IndexPath::new(0, 2), Row::label("A", None), &mut NoopDelegate)
            .unwrap_err();
        assert_eq!(err, FormError::RowOutOfRange(IndexPath::new(0, 2)));
        assert!(form.select(IndexPath::new(0, 0), &mut NoopDelegate).is_err());
    }

    #[test]
    fn test_toggle_inserts_one_detail_row_after_summary() {
        let mut rec = Recorder::default();
        let mut form = purchase_form(&mut rec);
        let summary = IndexPath::new(0, 1);
        let summary_id = form.row(summary).unwrap().id();

        let outcome = form.toggle_inline(summary, &mut rec).unwrap();
        assert_eq!(outcome, InlineToggle::Expanded);
        assert_eq!(form.row_count(), 4);
        assert_eq!(rec.rows.last().unwrap(), &vec![IndexPath::new(0, 2)]);

        let detail = form.row(IndexPath::new(0, 2)).unwrap();
        assert_eq!(detail.inline_parent(), Some(summary_id));
        let summary_row = form.row(summary).unwrap();
        assert!(summary_row.is_expanded());
        assert!(summary_row.cell_as::<PurchaseSummaryCell>().unwrap().is_expanded());

        let outcome = form.toggle_inline(summary, &mut rec).unwrap();
        assert_eq!(outcome, InlineToggle::Collapsed);
        assert_eq!(form.row_count(), 3);
        assert!(!form.row(summary).unwrap().is_expanded());
        let cell = form.row(summary).unwrap().cell_as::<PurchaseSummaryCell>().unwrap();
        assert!(!cell.is_expanded());
        assert!(form.rows().all(|(_, row)| row.inline_parent().is_none()));
    }

    #[test]
    fn test_remove_inline_row_collapses_parent() {
        let mut form = purchase_form(&mut NoopDelegate);
        let summary = IndexPath::new(0, 1);
        form.toggle_inline(summary, &mut NoopDelegate).unwrap();
        form.remove_row(IndexPath::new(0, 2)).unwrap();

        assert_eq!(form.row_count(), 3);
        let parent = form.row(summary).unwrap();
        assert!(!parent.is_expanded());
        assert!(!parent.cell_as::<PurchaseSummaryCell>().unwrap().is_expanded());

        assert_eq!(
            form.toggle_inline(summary, &mut NoopDelegate).unwrap(),
            InlineToggle::Expanded
        );
        assert_eq!(form.row_count(), 4);
    }

    #[test]
    fn test_repeated_toggles_pair_up() {
        let mut form = purchase_form(&mut NoopDelegate);
        let summary = IndexPath::new(0, 1);
        for round in 0..5 {
            assert_eq!(
                form.select(summary, &mut NoopDelegate).unwrap(),
                SelectOutcome::Expanded,
                "round {}",
                round
            );
            assert_eq!(form.row_count(), 4);
            assert_eq!(
                form.rows().filter(|(_, r)| r.inline_parent().is_some()).count(),
                1
            );
            assert_eq!(
                form.select(summary, &mut NoopDelegate).unwrap(),
                SelectOutcome::Collapsed
            );
            assert_eq!(form.row_count(), 3);
        }
        let last = form.row(IndexPath::new(0, 2)).unwrap().cell_as::<LabelCell>().unwrap();
        assert_eq!(last.title.text(), "AFTER");
    }

    #[test]
    fn test_disabled_row_never_toggles() {
        let mut form = Form::new();
        let handled = Rc::new(Counter::new(0));
        let h = handled.clone();
        form.append_section(
            Section::new().with_row(
                Row::purchase_history(purchase(1))
                    .disabled(true)
                    .on_cell_selection(move |_| h.set(h.get() + 1)),
            ),
            &mut NoopDelegate,
        );
        let path = IndexPath::new(0, 0);

        assert_eq!(form.select(path, &mut NoopDelegate).unwrap(), SelectOutcome::Ignored);
        assert_eq!(
            form.toggle_inline(path, &mut NoopDelegate).unwrap(),
            InlineToggle::Ignored
        );
        assert_eq!(form.row_count(), 1);
        assert_eq!(handled.get(), 0);
        assert!(!form.row(path).unwrap().state.selected);
    }

    #[test]
    fn test_select_runs_handler_and_marks_selected() {
        let mut form = Form::new();
        let handled = Rc::new(Counter::new(0));
        let h = handled.clone();
        form.append_section(
            Section::new()
                .with_row(Row::label("A", None).on_cell_selection(move |_| h.set(h.get() + 1)))
                .with_row(Row::label("B", None)),
            &mut NoopDelegate,
        );

        let outcome = form.select(IndexPath::new(0, 0), &mut NoopDelegate).unwrap();
        assert_eq!(outcome, SelectOutcome::Selected);
        assert_eq!(handled.get(), 1);
        assert!(form.row(IndexPath::new(0, 0)).unwrap().state.selected);

        form.select(IndexPath::new(0, 1), &mut NoopDelegate).unwrap();
        assert!(!form.row(IndexPath::new(0, 0)).unwrap().state.selected);
        assert!(form.row(IndexPath::new(0, 1)).unwrap().state.selected);
    }

    #[test]
    fn test_selecting_detail_row_does_not_keep_selection() {
        let mut form = purchase_form(&mut NoopDelegate);
        form.toggle_inline(IndexPath::new(0, 1), &mut NoopDelegate).unwrap();
        let detail = IndexPath::new(0, 2);
        let outcome = form.select(detail, &mut NoopDelegate).unwrap();
        assert_eq!(outcome, SelectOutcome::Selected);
        assert!(!form.row(detail).unwrap().state.selected);
        assert_eq!(form.row_count(), 4);
    }

    #[test]
    fn test_remove_expanded_row_takes_inline_row() {
        let mut form = purchase_form(&mut NoopDelegate);
        form.toggle_inline(IndexPath::new(0, 1), &mut NoopDelegate).unwrap();
        assert_eq!(form.row_count(), 4);
        form.remove_row(IndexPath::new(0, 1)).unwrap();
        assert_eq!(form.row_count(), 2);
        assert!(form.rows().all(|(_, row)| row.inline_parent().is_none()));
    }

    #[test]
    fn test_batch_publishes_single_revision() {
        let mut form = Form::new();
        form.append_section(Section::new(), &mut NoopDelegate);
        let before = form.revision();

        form.perform_without_animation(|form| {
            assert!(form.is_batching());
            form.remove_all();
            let s = form.append_section(Section::new(), &mut NoopDelegate);
            for i in 0..3 {
                form.append_row(s, Row::label(format!("{}", i), None), &mut NoopDelegate)
                    .unwrap();
            }
        });

        assert!(!form.is_batching());
        assert_eq!(form.revision(), before + 1);

        form.append_row(0, Row::label("x", None), &mut NoopDelegate).unwrap();
        assert_eq!(form.revision(), before + 2);
    }

    #[test]
    fn test_swipe_actions() {
        let mut form = Form::new();
        let fired = Rc::new(Counter::new(0));
        let f = fired.clone();
        form.append_section(
            Section::new().with_row(
                Row::label("note", None).with_trailing_swipe(vec![
                    SwipeAction::new(SwipeStyle::Destructive, "DELETE", move |_| {
                        f.set(f.get() + 1);
                        true
                    }),
                ]),
            ),
            &mut NoopDelegate,
        );
        let path = IndexPath::new(0, 0);
        assert_eq!(form.trigger_swipe(path, 0), Ok(true));
        assert_eq!(fired.get(), 1);
        assert_eq!(
            form.trigger_swipe(path, 1),
            Err(FormError::ActionOutOfRange(path, 1))
        );
    }

    #[test]
    fn test_lookup_helpers() {
        let mut form = Form::new();
        form.append_section(
            Section::new()
                .with_row(Row::label("A", None).with_tag("about"))
                .with_row(Row::label("B", None)),
            &mut NoopDelegate,
        );
        let tagged = form.row_by_tag("about").unwrap();
        assert_eq!(form.position_of(tagged.id()), Some(IndexPath::new(0, 0)));
        assert!(form.row_by_tag("missing").is_none());

        form.row_mut(IndexPath::new(0, 1)).unwrap().state.hidden = true;
        assert_eq!(form.visible_paths(), vec![IndexPath::new(0, 0)]);
    }
}
