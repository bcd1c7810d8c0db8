//! Style builders shared by the grid, zoom, and footer renderers.
//!
//! Colors follow the selector's conventions: blue marks the focused cell,
//! red marks grouped cells.

use ratatui::style::{Color, Modifier, Style};

use crate::grid::Mark;

pub fn text() -> Style {
    Style::default().fg(Color::Reset)
}

pub fn text_dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn title() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

pub fn border() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn border_focused() -> Style {
    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
}

pub fn border_grouped() -> Style {
    Style::default().fg(Color::Red)
}

pub fn mark(mark: Mark) -> Style {
    match mark {
        Mark::Keep => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Mark::Delete => Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
    }
}

/// Short tag shown in a marked cell.
pub fn mark_tag(mark: Mark) -> &'static str {
    match mark {
        Mark::Keep => "[K]",
        Mark::Delete => "[D]",
    }
}

pub fn hint_key() -> Style {
    Style::default().fg(Color::Yellow)
}
