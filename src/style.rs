//! Stylist tokens and the stylable capability.
//!
//! A [`Stylist`] is an immutable bag of fonts and colors built once per
//! screen. Cells that want it implement [`Stylable`]; callers never need to
//! know which concrete cells those are.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Point size from which a font renders emphasized in the terminal.
pub const EMPHASIS_SIZE: u16 = 14;

/// Semantic font token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    pub family: String,
    pub size: u16,
}

impl Font {
    pub fn new(family: impl Into<String>, size: u16) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    /// Terminal modifiers that stand in for this font.
    pub fn modifier(&self) -> Modifier {
        if self.size >= EMPHASIS_SIZE {
            Modifier::BOLD
        } else {
            Modifier::empty()
        }
    }
}

/// Presentation tokens shared by every cell of a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylist {
    pub title_font: Font,
    pub title_color: Color,
    pub body_font: Font,
    pub body_color: Color,
    pub accessory_font: Font,
    pub accessory_color: Color,
}

impl Default for Stylist {
    fn default() -> Self {
        Self {
            title_font: Font::new("Menlo-Regular", 12),
            title_color: Color::Gray,
            body_font: Font::new("Menlo-Regular", 14),
            body_color: Color::White,
            accessory_font: Font::new("Menlo-Regular", 14),
            accessory_color: Color::Red,
        }
    }
}

/// Capability of a cell (or a cell's sub-view) to take a [`Stylist`].
///
/// Applying the same stylist twice leaves the receiver unchanged.
pub trait Stylable {
    fn style(&mut self, stylist: &Stylist);
}

/// A single text element with its own font and color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextLabel {
    pub text: Option<String>,
    pub font: Option<Font>,
    pub color: Option<Color>,
}

impl TextLabel {
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn clear(&mut self) {
        self.text = None;
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Assigns font and color in one go.
    pub fn apply(&mut self, font: &Font, color: Color) {
        self.font = Some(font.clone());
        self.color = Some(color);
    }

    /// ratatui style for the current font and color.
    pub fn text_style(&self) -> Style {
        let mut style = Style::default();
        if let Some(color) = self.color {
            style = style.fg(color);
        }
        if let Some(font) = &self.font {
            style = style.add_modifier(font.modifier());
        }
        style
    }

    pub fn span(&self) -> Span<'static> {
        Span::styled(self.text().to_string(), self.text_style())
    }

    /// Span left-aligned in `width` columns, truncated with an ellipsis.
    pub fn span_padded(&self, width: usize) -> Span<'static> {
        Span::styled(fit(self.text(), width), self.text_style())
    }
}

/// Pads or truncates `s` to exactly `width` terminal columns. A wide glyph
/// that would straddle the edge is replaced by padding.
pub fn fit(s: &str, width: usize) -> String {
    let columns = s.width();
    if columns <= width {
        return format!("{}{}", s, " ".repeat(width - columns));
    }
    let (mut out, used) = if width <= 3 {
        take_columns(s, width)
    } else {
        let (head, used) = take_columns(s, width - 3);
        (head + "...", used + 3)
    };
    out.push_str(&" ".repeat(width - used));
    out
}

/// Longest prefix of `s` that fits in `max` columns, with its width.
fn take_columns(s: &str, max: usize) -> (String, usize) {
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        out.push(c);
    }
    (out, used)
}
