//! Popup listing the swipe actions of one row.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::form::{Form, IndexPath, SwipeStyle};
use crate::tui::style::Styles;

use super::popup_area;

/// Renders the swipe action menu of the row at `path`.
pub fn render_swipe_menu(frame: &mut Frame, area: Rect, form: &Form, path: IndexPath, selected: usize) {
    let Some(row) = form.row(path) else {
        return;
    };

    let height = row.trailing_swipe.len() as u16 + 4;
    let popup = popup_area(area, 30, height);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let mut content: Vec<Line> = row
        .trailing_swipe
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let marker = if i == selected { "> " } else { "  " };
            let style = match action.style {
                SwipeStyle::Destructive => Styles::destructive(),
                SwipeStyle::Normal => Styles::text(),
            };
            let style = if i == selected {
                style.patch(Styles::selected())
            } else {
                style
            };
            Line::from(vec![
                Span::raw(marker),
                Span::styled(action.title.clone(), style),
            ])
        })
        .collect();
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("Enter", Styles::help_key()),
        Span::styled(" run  ", Styles::help()),
        Span::styled("Esc", Styles::help_key()),
        Span::styled(" close", Styles::help()),
    ]));

    frame.render_widget(Paragraph::new(content), inner);
}
