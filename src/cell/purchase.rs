//! Purchase summary cell: date, total and store, expandable inline.

use std::any::Any;

use ratatui::text::{Line, Span};

use super::{Cell, PurchaseDetailsCell};
use crate::model::PurchaseHistoryContent;
use crate::style::{Stylable, Stylist, TextLabel, fit};

const COLLAPSED_GLYPH: &str = "[+]";
const EXPANDED_GLYPH: &str = "[-]";

/// Three-column summary of one purchase with an expand indicator.
#[derive(Debug, Clone)]
pub struct PurchaseSummaryCell {
    value: PurchaseHistoryContent,
    expanded: bool,
    pub date: TextLabel,
    pub amount: TextLabel,
    pub store: TextLabel,
    pub indicator: TextLabel,
}

impl PurchaseSummaryCell {
    pub fn new(value: PurchaseHistoryContent) -> Self {
        let mut indicator = TextLabel::default();
        indicator.set_text(COLLAPSED_GLYPH);
        Self {
            value,
            expanded: false,
            date: TextLabel::default(),
            amount: TextLabel::default(),
            store: TextLabel::default(),
            indicator,
        }
    }

    pub fn value(&self) -> &PurchaseHistoryContent {
        &self.value
    }

    /// State of the expand indicator.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    fn refresh(&mut self, expanded: bool) {
        self.expanded = expanded;
        self.indicator.set_text(if expanded {
            EXPANDED_GLYPH
        } else {
            COLLAPSED_GLYPH
        });
    }
}

impl Cell for PurchaseSummaryCell {
    fn update(&mut self) {
        self.date.set_text(self.value.date.clone());
        self.amount.set_text(self.value.total_price.clone());
        self.store.set_text(self.value.store.clone());
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let glyph_width = COLLAPSED_GLYPH.len();
        let column = (width as usize).saturating_sub(glyph_width + 1) / 3;
        vec![Line::from(vec![
            self.date.span_padded(column),
            self.amount.span_padded(column),
            self.store.span_padded(column),
            Span::raw(" "),
            Span::styled(
                fit(self.indicator.text(), glyph_width),
                self.indicator.text_style(),
            ),
        ])]
    }

    fn as_stylable(&mut self) -> Option<&mut dyn Stylable> {
        Some(self)
    }

    fn inline_cell(&self) -> Option<Box<dyn Cell>> {
        Some(Box::new(PurchaseDetailsCell::new(self.value.clone())))
    }

    fn inline_toggled(&mut self, expanded: bool) {
        self.refresh(expanded);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Stylable for PurchaseSummaryCell {
    fn style(&mut self, stylist: &Stylist) {
        for label in [&mut self.date, &mut self.amount, &mut self.store] {
            label.apply(&stylist.body_font, stylist.body_color);
        }
        self.indicator
            .apply(&stylist.accessory_font, stylist.accessory_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> PurchaseHistoryContent {
        PurchaseHistoryContent {
            date: "17/09/2012".to_string(),
            total_price: "120.2€".to_string(),
            store: "There".to_string(),
            products: vec![],
        }
    }

    #[test]
    fn test_update_shows_summary_fields() {
        let mut cell = PurchaseSummaryCell::new(content());
        cell.update();
        assert_eq!(cell.date.text(), "17/09/2012");
        assert_eq!(cell.amount.text(), "120.2€");
        assert_eq!(cell.store.text(), "There");
        assert!(!cell.is_expanded());
        assert_eq!(cell.indicator.text(), "[+]");
    }

    #[test]
    fn test_indicator_follows_inline_state() {
        let mut cell = PurchaseSummaryCell::new(content());
        cell.inline_toggled(true);
        assert!(cell.is_expanded());
        assert_eq!(cell.indicator.text(), "[-]");
        cell.inline_toggled(false);
        assert!(!cell.is_expanded());
        assert_eq!(cell.indicator.text(), "[+]");
    }

    #[test]
    fn test_inline_cell_carries_same_content() {
        let cell = PurchaseSummaryCell::new(content());
        let inline = cell.inline_cell().unwrap();
        let details = inline
            .as_any()
            .downcast_ref::<PurchaseDetailsCell>()
            .unwrap();
        assert_eq!(details.value(), Some(&content()));
    }

    #[test]
    fn test_style_reads_back_stylist_tokens() {
        let stylist = Stylist::default();
        let mut cell = PurchaseSummaryCell::new(content());
        cell.style(&stylist);
        for label in [&cell.date, &cell.amount, &cell.store] {
            assert_eq!(label.font.as_ref(), Some(&stylist.body_font));
            assert_eq!(label.color, Some(stylist.body_color));
        }
        assert_eq!(cell.indicator.color, Some(stylist.accessory_color));
    }
}
