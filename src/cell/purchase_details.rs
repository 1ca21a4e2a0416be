//! Inline body of a purchase: one stacked view per product.

use std::any::Any;

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::Cell;
use crate::model::{Product, PurchaseHistoryContent};
use crate::style::{Stylable, Stylist, TextLabel};

/// Asset name of the product image placeholder.
pub const PLACEHOLDER_IMAGE: &str = "AppIcon";

const IMAGE_GLYPH: &str = "▣";
const INDENT: &str = "    ";

/// Sub-view showing a single product.
#[derive(Debug, Clone, Default)]
pub struct ProductView {
    pub image: Option<&'static str>,
    pub title: TextLabel,
    pub description: TextLabel,
    pub price: TextLabel,
}

impl ProductView {
    pub fn configure(&mut self, product: &Product) {
        self.title.set_text(product.title.clone());
        self.description.set_text(product.description.clone());
        self.price.set_text(product.price.clone());
        self.image = Some(PLACEHOLDER_IMAGE);
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let price_len = self.price.text().width();
        let title_width = width.saturating_sub(INDENT.len() + 2 + price_len + 1);
        vec![
            Line::from(vec![
                Span::raw(INDENT),
                Span::styled(
                    if self.image.is_some() { IMAGE_GLYPH } else { " " },
                    self.title.text_style(),
                ),
                Span::raw(" "),
                self.title.span_padded(title_width),
                Span::raw(" "),
                self.price.span(),
            ]),
            Line::from(vec![
                Span::raw(INDENT),
                Span::raw("  "),
                self.description.span(),
            ]),
        ]
    }
}

impl Stylable for ProductView {
    fn style(&mut self, stylist: &Stylist) {
        self.title.apply(&stylist.title_font, stylist.title_color);
        self.description
            .apply(&stylist.body_font, stylist.body_color);
        self.price
            .apply(&stylist.accessory_font, stylist.accessory_color);
    }
}

/// Detail cell revealed below an expanded purchase summary.
///
/// Product views are created when the content is shown, and receive the
/// stylist this cell holds at that moment.
#[derive(Debug, Clone, Default)]
pub struct PurchaseDetailsCell {
    value: Option<PurchaseHistoryContent>,
    stylist: Option<Stylist>,
    products: Vec<ProductView>,
}

impl PurchaseDetailsCell {
    pub fn new(value: PurchaseHistoryContent) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    pub fn value(&self) -> Option<&PurchaseHistoryContent> {
        self.value.as_ref()
    }

    pub fn stylist(&self) -> Option<&Stylist> {
        self.stylist.as_ref()
    }

    /// Product views, in product order.
    pub fn product_views(&self) -> &[ProductView] {
        &self.products
    }

    fn set_contents(&mut self) {
        self.products.clear();
        let Some(content) = self.value.as_ref() else {
            return;
        };
        for product in &content.products {
            let mut view = ProductView::default();
            if let Some(stylist) = &self.stylist {
                view.style(stylist);
            }
            view.configure(product);
            self.products.push(view);
        }
    }
}

impl Cell for PurchaseDetailsCell {
    fn update(&mut self) {
        self.set_contents();
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        self.products
            .iter()
            .flat_map(|view| view.lines(width as usize))
            .collect()
    }

    fn as_stylable(&mut self) -> Option<&mut dyn Stylable> {
        Some(self)
    }

    fn keeps_selection(&self) -> bool {
        false
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Stylable for PurchaseDetailsCell {
    fn style(&mut self, stylist: &Stylist) {
        self.stylist = Some(stylist.clone());
        for view in &mut self.products {
            view.style(stylist);
        }
    }
}
