//! The form itself: every visible row rendered by its cell.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::form::Form;
use crate::tui::state::AppState;
use crate::tui::style::Styles;

const HIGHLIGHT_SYMBOL: &str = "> ";

/// Renders the form as a scrolling list. Rows grow to the height of their
/// cell; sections are separated by a blank line.
pub fn render_form(frame: &mut Frame, area: Rect, state: &mut AppState, form: &Form) {
    let block = Block::default()
        .title(" Customer ")
        .borders(Borders::ALL)
        .border_style(Styles::border());

    if form.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let waiting = Paragraph::new("Loading customer...")
            .alignment(Alignment::Center)
            .style(Styles::dim());
        frame.render_widget(waiting, inner);
        return;
    }

    let width = area
        .width
        .saturating_sub(2 + HIGHLIGHT_SYMBOL.len() as u16);
    let cursor = state.current_path(form);

    let mut items: Vec<ListItem> = Vec::new();
    let mut cursor_item = None;
    for (s, section) in form.sections().iter().enumerate() {
        if s > 0 {
            items.push(ListItem::new(Line::from("")));
        }
        for (r, row) in section.rows().iter().enumerate() {
            if row.is_hidden() {
                continue;
            }
            let mut lines = row.cell().lines(width);
            if lines.is_empty() {
                lines.push(Line::from(""));
            }
            let mut item = ListItem::new(Text::from(lines));
            if row.is_disabled() {
                item = item.style(Styles::dim());
            }
            if cursor.is_some_and(|p| p.section == s && p.row == r) {
                cursor_item = Some(items.len());
            }
            items.push(item);
        }
    }

    state.list_state.select(cursor_item);
    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected())
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(list, area, &mut state.list_state);
}
