//! Footer line: status message, last row action, or key hints.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::controller::ProfileController;
use crate::tui::state::AppState;
use crate::tui::style::Styles;

const HINTS: [(&str, &str); 5] = [
    ("Enter", "select"),
    ("+", "expand"),
    ("s", "swipe"),
    ("?", "help"),
    ("q", "quit"),
];

/// Renders the footer line.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState, controller: &ProfileController) {
    let line = if let Some(msg) = &state.status_message {
        Line::from(Span::styled(format!(" {}", msg), Styles::help_key()))
    } else if let Some(action) = controller.actions().last() {
        Line::from(vec![
            Span::styled(" last action: ", Styles::help()),
            Span::styled(action, Styles::text()),
        ])
    } else {
        let spans: Vec<Span> = HINTS
            .iter()
            .flat_map(|(key, what)| {
                vec![
                    Span::styled(format!(" {}", key), Styles::help_key()),
                    Span::styled(format!(" {} ", what), Styles::help()),
                ]
            })
            .collect();
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(line), area);
}
