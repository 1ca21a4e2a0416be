//! Title + value label cell.

use std::any::Any;

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::Cell;
use crate::style::{Stylable, Stylist, TextLabel};

/// One line: title on the left, accessory value right-aligned.
#[derive(Debug, Clone, Default)]
pub struct LabelCell {
    title_value: Option<String>,
    value: Option<String>,
    pub title: TextLabel,
    pub detail: TextLabel,
}

impl LabelCell {
    pub fn new(title: impl Into<String>, value: Option<String>) -> Self {
        Self {
            title_value: Some(title.into()),
            value,
            ..Self::default()
        }
    }

    pub fn set_value(&mut self, title: Option<String>, value: Option<String>) {
        self.title_value = title;
        self.value = value;
    }
}

impl Cell for LabelCell {
    fn update(&mut self) {
        match &self.title_value {
            Some(t) => self.title.set_text(t.clone()),
            None => self.title.clear(),
        }
        match &self.value {
            Some(v) => self.detail.set_text(v.clone()),
            None => self.detail.clear(),
        }
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let width = width as usize;
        let detail_len = self.detail.text().width();
        let gap = if detail_len > 0 { 1 } else { 0 };
        let title_width = width.saturating_sub(detail_len + gap);
        let mut spans = vec![self.title.span_padded(title_width)];
        if detail_len > 0 {
            spans.push(Span::raw(" "));
            spans.push(self.detail.span());
        }
        vec![Line::from(spans)]
    }

    fn as_stylable(&mut self) -> Option<&mut dyn Stylable> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Stylable for LabelCell {
    fn style(&mut self, stylist: &Stylist) {
        self.title.apply(&stylist.body_font, stylist.body_color);
        self.detail
            .apply(&stylist.accessory_font, stylist.accessory_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_reads_back_stylist_tokens() {
        let stylist = Stylist::default();
        let mut cell = LabelCell::new("ABOUT TOM", Some("EDIT".to_string()));
        cell.style(&stylist);

        assert_eq!(cell.title.font.as_ref(), Some(&stylist.body_font));
        assert_eq!(cell.title.color, Some(stylist.body_color));
        assert_eq!(cell.detail.font.as_ref(), Some(&stylist.accessory_font));
        assert_eq!(cell.detail.color, Some(stylist.accessory_color));
    }

    #[test]
    fn test_update_fills_labels() {
        let mut cell = LabelCell::new("WHO IS TOM", Some("ADD".to_string()));
        cell.update();
        assert_eq!(cell.title.text(), "WHO IS TOM");
        assert_eq!(cell.detail.text(), "ADD");

        cell.set_value(Some("note".to_string()), None);
        cell.update();
        assert_eq!(cell.title.text(), "note");
        assert_eq!(cell.detail.text, None);
    }

    #[test]
    fn test_lines_right_align_value() {
        let mut cell = LabelCell::new("ABOUT", Some("EDIT".to_string()));
        cell.update();
        let lines = cell.lines(20);
        assert_eq!(lines.len(), 1);
        let text: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text.chars().count(), 20);
        assert!(text.starts_with("ABOUT"));
        assert!(text.ends_with("EDIT"));
    }
}
