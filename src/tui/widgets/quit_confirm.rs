//! Quit confirmation popup widget.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::style::Styles;

use super::popup_area;

/// Renders a centered quit confirmation popup.
pub fn render_quit_confirm(frame: &mut Frame, area: Rect) {
    let popup_width = (area.width / 2).clamp(40, 60);
    let popup = popup_area(area, popup_width, 7);

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Exit profile ")
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let content = vec![
        Line::from(Span::styled("Are you sure you want to quit?", Styles::text())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Styles::help_key()),
            Span::styled(" or ", Styles::help()),
            Span::styled("q", Styles::help_key()),
            Span::styled(" → quit", Styles::help()),
        ]),
        Line::from(vec![
            Span::styled("Esc", Styles::help_key()),
            Span::styled(" or ", Styles::help()),
            Span::styled("n", Styles::help_key()),
            Span::styled(" → cancel", Styles::help()),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .style(Styles::text());
    frame.render_widget(paragraph, inner);
}
