//! Help popup widget.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::style::Styles;

use super::popup_area;

const KEYS: [(&str, &str); 9] = [
    ("Up/k Down/j", "move cursor"),
    ("PgUp PgDn", "move by page"),
    ("Home End", "first / last row"),
    ("Enter Space", "select row (expands purchases)"),
    ("+ - e", "expand control of a purchase"),
    ("Left s", "swipe actions of a comment"),
    ("?", "toggle this help"),
    ("q", "quit"),
    ("Ctrl+C", "quit immediately"),
];

/// Renders the help popup centered on screen.
pub fn render_help(frame: &mut Frame, area: Rect) {
    let popup = popup_area(area, 56, KEYS.len() as u16 + 4);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let mut content: Vec<Line> = KEYS
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!("{:<14}", key), Styles::help_key()),
                Span::styled(*what, Styles::text()),
            ])
        })
        .collect();
    content.push(Line::from(""));
    content.push(Line::from(Span::styled("Esc to close", Styles::help())));

    frame.render_widget(Paragraph::new(content), inner);
}
