//! Color scheme and styles for screen chrome (header, cursor, popups).
//!
//! Row content is styled by the screen's stylist, not from here.

use ratatui::style::{Color, Modifier, Style};

/// Chrome color palette.
pub struct Theme;

impl Theme {
    pub const HEADER_BG: Color = Color::Blue;
    pub const SELECTED_BG: Color = Color::DarkGray;

    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;

    pub const BORDER: Color = Color::Cyan;
    pub const DESTRUCTIVE: Color = Color::Red;
    pub const KEY: Color = Color::Yellow;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Cursor row style.
    pub fn selected() -> Style {
        Style::default().bg(Theme::SELECTED_BG)
    }

    /// Disabled rows and secondary text.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Popup border style.
    pub fn border() -> Style {
        Style::default().fg(Theme::BORDER)
    }

    /// Destructive swipe action style.
    pub fn destructive() -> Style {
        Style::default()
            .fg(Theme::DESTRUCTIVE)
            .add_modifier(Modifier::BOLD)
    }

    /// Help text style.
    pub fn help() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Help key style (highlighted keys in help line).
    pub fn help_key() -> Style {
        Style::default().fg(Theme::KEY).add_modifier(Modifier::BOLD)
    }

    /// Plain popup text.
    pub fn text() -> Style {
        Style::default().fg(Theme::FG)
    }
}
