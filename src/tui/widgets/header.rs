//! Header bar: screen name, customer and form size.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Paragraph;

use crate::controller::ProfileController;
use crate::tui::style::Styles;

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, controller: &ProfileController) {
    let chunks = Layout::horizontal([
        Constraint::Length(16), // Screen name
        Constraint::Min(20),    // Customer
        Constraint::Length(24), // Sections / rows
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(" PROFILE ").style(Styles::header()),
        chunks[0],
    );

    let customer = match controller.customer() {
        Some(c) => match &c.title {
            Some(title) => format!("{} {} {}", title, c.first_name, c.surname),
            None => format!("{} {}", c.first_name, c.surname),
        },
        None => "loading...".to_string(),
    };
    frame.render_widget(Paragraph::new(customer).style(Styles::header()), chunks[1]);

    let form = controller.form();
    let size = format!(
        "{} sections {} rows ",
        form.section_count(),
        form.row_count()
    );
    frame.render_widget(
        Paragraph::new(size)
            .alignment(ratatui::layout::Alignment::Right)
            .style(Styles::header()),
        chunks[2],
    );
}
