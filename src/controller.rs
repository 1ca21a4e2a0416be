//! Profile screen controller: builds the form from a customer view model and
//! styles every row the form reports as inserted.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, info};

use crate::form::{
    Form, FormDelegate, FormError, IndexPath, InlineToggle, Row, Section, SelectOutcome,
    SwipeAction, SwipeStyle,
};
use crate::model::{ColumnContent, Comment, CustomerViewModel};
use crate::schedule::MainQueue;
use crate::style::Stylist;

/// Default wait before the demo customer shows up.
pub const DEFAULT_POPULATE_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Default)]
struct Recorded {
    count: usize,
    last: Option<String>,
}

/// Row action messages. Every message goes to the log; only the newest is
/// kept for display.
#[derive(Debug, Clone, Default)]
pub struct ActionLog(Rc<RefCell<Recorded>>);

impl ActionLog {
    pub fn record(&self, message: impl Into<String>) {
        let message = message.into();
        info!(action = %message, "row action");
        let mut recorded = self.0.borrow_mut();
        recorded.count += 1;
        recorded.last = Some(message);
    }

    /// Newest message.
    pub fn last(&self) -> Option<String> {
        self.0.borrow().last.clone()
    }

    /// Number of messages recorded so far.
    pub fn len(&self) -> usize {
        self.0.borrow().count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Applies `stylist` to every row that has the stylable capability.
/// Returns how many rows were styled.
pub fn style_rows<'a>(rows: impl IntoIterator<Item = &'a mut Row>, stylist: &Stylist) -> usize {
    let mut styled = 0;
    for row in rows {
        if let Some(stylable) = row.as_stylable() {
            stylable.style(stylist);
            styled += 1;
        }
    }
    styled
}

/// Form delegate that styles inserted rows.
#[derive(Debug)]
pub struct RowStyler {
    stylist: Rc<Stylist>,
    applied: usize,
}

impl RowStyler {
    pub fn new(stylist: Rc<Stylist>) -> Self {
        Self {
            stylist,
            applied: 0,
        }
    }

    pub fn stylist(&self) -> &Stylist {
        &self.stylist
    }

    /// Total style calls made so far.
    pub fn applied(&self) -> usize {
        self.applied
    }
}

impl FormDelegate for RowStyler {
    fn rows_inserted(&mut self, rows: &mut [Row], _at: &[IndexPath]) {
        self.applied += style_rows(rows.iter_mut(), &self.stylist);
    }

    fn sections_inserted(&mut self, sections: &mut [Section], _at: &[usize]) {
        let rows = sections
            .iter_mut()
            .flat_map(|section| section.rows_mut().iter_mut());
        self.applied += style_rows(rows, &self.stylist);
    }
}

/// Owns the profile form and keeps it in sync with the view model.
#[derive(Debug)]
pub struct ProfileController {
    form: Form,
    styler: RowStyler,
    customer: Option<CustomerViewModel>,
    actions: ActionLog,
}

impl ProfileController {
    pub fn new(stylist: Rc<Stylist>) -> Self {
        Self {
            form: Form::new(),
            styler: RowStyler::new(stylist),
            customer: None,
            actions: ActionLog::default(),
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn stylist(&self) -> &Stylist {
        self.styler.stylist()
    }

    pub fn actions(&self) -> &ActionLog {
        &self.actions
    }

    pub fn customer(&self) -> Option<&CustomerViewModel> {
        self.customer.as_ref()
    }

    /// Total style calls made on inserted rows.
    pub fn styled_count(&self) -> usize {
        self.styler.applied()
    }

    /// Replaces the view model and rebuilds the whole form from it.
    ///
    /// `None` leaves the form untouched.
    pub fn set_view_model(&mut self, customer: Option<CustomerViewModel>) {
        let Some(customer) = customer else {
            debug!("no customer view model, form left as is");
            return;
        };

        let styler = &mut self.styler;
        let actions = &self.actions;
        self.form
            .perform_without_animation(|form| build_profile(form, &customer, styler, actions));

        info!(
            sections = self.form.section_count(),
            rows = self.form.row_count(),
            "profile form rebuilt"
        );
        self.customer = Some(customer);
    }

    /// Insertion callback: styles the stylable subset of `rows`.
    pub fn rows_inserted(&mut self, rows: &mut [Row], at: &[IndexPath]) {
        self.styler.rows_inserted(rows, at);
    }

    /// Insertion callback: styles the stylable rows of `sections`.
    pub fn sections_inserted(&mut self, sections: &mut [Section], at: &[usize]) {
        self.styler.sections_inserted(sections, at);
    }

    pub fn select(&mut self, path: IndexPath) -> Result<SelectOutcome, FormError> {
        self.form.select(path, &mut self.styler)
    }

    /// Expand control of a row.
    pub fn toggle_inline(&mut self, path: IndexPath) -> Result<InlineToggle, FormError> {
        self.form.toggle_inline(path, &mut self.styler)
    }

    pub fn trigger_swipe(&self, path: IndexPath, index: usize) -> Result<bool, FormError> {
        self.form.trigger_swipe(path, index)
    }

    /// Populates `this` with `customer` after `delay`, unless the controller
    /// has been dropped by then.
    pub fn schedule_population(
        this: &Rc<RefCell<Self>>,
        queue: &mut MainQueue,
        delay: Duration,
        customer: CustomerViewModel,
    ) {
        let controller = Rc::downgrade(this);
        queue.after(delay, move || match controller.upgrade() {
            Some(controller) => controller.borrow_mut().set_view_model(Some(customer)),
            None => debug!("controller gone before delayed population"),
        });
    }
}

fn build_profile(
    form: &mut Form,
    customer: &CustomerViewModel,
    delegate: &mut dyn FormDelegate,
    actions: &ActionLog,
) {
    form.remove_all();

    let first_name = customer.first_name.clone();
    let log = actions.clone();
    let mut details = Section::new().with_row(
        Row::label(format!("ABOUT {}", customer.first_name), Some("EDIT"))
            .with_tag("about")
            .on_cell_selection(move |_| log.record(format!("Go to EDIT for {}", first_name))),
    );
    if let Some(prefix) = &customer.title {
        details.push(
            Row::two_column(vec![ColumnContent::new("PREFIX", prefix.clone())]).with_tag("prefix"),
        );
    }
    details.push(
        Row::two_column(vec![
            ColumnContent::new("FIRST NAME", customer.first_name.clone()),
            ColumnContent::new("LAST NAME", customer.surname.clone()),
        ])
        .with_tag("name"),
    );
    form.append_section(details, delegate);

    let first_name = customer.first_name.clone();
    let log = actions.clone();
    let history = form.append_section(
        Section::new().with_row(
            Row::label(format!("WHO IS {}", customer.first_name), Some("ADD"))
                .with_tag("who")
                .on_cell_selection(move |_| {
                    log.record(format!("Go to ADD COMMENT for {}", first_name))
                }),
        ),
        delegate,
    );

    for (i, comment) in customer.comments.iter().enumerate() {
        let row = comment_row(comment, actions).with_tag(format!("comment.{}", i));
        append(form, history, row, delegate);
    }

    for (i, purchase) in customer.purchases.iter().enumerate() {
        let row = Row::purchase_history(purchase.clone()).with_tag(format!("purchase.{}", i));
        append(form, history, row, delegate);
    }
}

fn comment_row(comment: &Comment, actions: &ActionLog) -> Row {
    let (log, value) = (actions.clone(), comment.value.clone());
    let delete = SwipeAction::new(SwipeStyle::Destructive, "DELETE", move |_| {
        log.record(format!("DELETE {}", value));
        true
    });
    let (log, value) = (actions.clone(), comment.value.clone());
    let edit = SwipeAction::new(SwipeStyle::Normal, "EDIT", move |_| {
        log.record(format!("EDIT {}", value));
        true
    });

    Row::label(comment.value.clone(), None).with_trailing_swipe(vec![delete, edit])
}

fn append(form: &mut Form, section: usize, row: Row, delegate: &mut dyn FormDelegate) {
    if let Err(e) = form.append_row(section, row, delegate) {
        debug!(error = %e, "row not appended");
    }
}
