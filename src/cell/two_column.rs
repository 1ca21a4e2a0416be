//! Side-by-side pair of titled values.

use std::any::Any;

use ratatui::text::Line;

use super::Cell;
use crate::model::ColumnContent;
use crate::style::{Stylable, Stylist, TextLabel};

/// Renders up to two [`ColumnContent`] entries.
///
/// Entries beyond the second are ignored. Missing entries leave their
/// slot blank.
#[derive(Debug, Clone, Default)]
pub struct TwoColumnCell {
    value: Option<Vec<ColumnContent>>,
    contents: Vec<ColumnContent>,
    pub title1: TextLabel,
    pub label1: TextLabel,
    pub title2: TextLabel,
    pub label2: TextLabel,
}

impl TwoColumnCell {
    pub fn new(value: Vec<ColumnContent>) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    pub fn set_value(&mut self, value: Option<Vec<ColumnContent>>) {
        self.value = value;
    }

    /// Contents currently shown.
    pub fn contents(&self) -> &[ColumnContent] {
        &self.contents
    }

    fn set_contents(&mut self, contents: Vec<ColumnContent>) {
        self.title1.clear();
        self.label1.clear();
        self.title2.clear();
        self.label2.clear();

        if let Some(first) = contents.first() {
            self.title1.set_text(first.title.clone());
            self.label1.set_text(first.value.clone());
        }
        if let Some(second) = contents.get(1) {
            self.title2.set_text(second.title.clone());
            self.label2.set_text(second.value.clone());
        }

        self.contents = contents;
    }

    fn labels_mut(&mut self) -> [&mut TextLabel; 4] {
        [
            &mut self.title1,
            &mut self.label1,
            &mut self.title2,
            &mut self.label2,
        ]
    }
}

impl Cell for TwoColumnCell {
    fn update(&mut self) {
        let contents = self.value.clone().unwrap_or_default();
        self.set_contents(contents);
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let half = (width as usize) / 2;
        vec![
            Line::from(vec![
                self.title1.span_padded(half),
                self.title2.span_padded(half),
            ]),
            Line::from(vec![
                self.label1.span_padded(half),
                self.label2.span_padded(half),
            ]),
        ]
    }

    fn as_stylable(&mut self) -> Option<&mut dyn Stylable> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Stylable for TwoColumnCell {
    fn style(&mut self, stylist: &Stylist) {
        let [title1, label1, title2, label2] = self.labels_mut();
        title1.apply(&stylist.title_font, stylist.title_color);
        title2.apply(&stylist.title_font, stylist.title_color);
        label1.apply(&stylist.body_font, stylist.body_color);
        label2.apply(&stylist.body_font, stylist.body_color);
    }
}
