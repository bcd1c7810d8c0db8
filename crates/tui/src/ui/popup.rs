//! Help popup rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block, Clear, Paragraph},
};

use crate::app::App;
use crate::input::help::help_text;
use crate::ui::theme;

/// Draw the keybinding help over the current frame.
pub fn render_help(f: &mut Frame, app: &App) {
    let area = centered_rect(70, 80, f.area());
    f.render_widget(Clear, area);

    let p = Paragraph::new(help_text(&app.overrides)).block(
        Block::bordered()
            .title(" Help (any key to close) ")
            .title_style(theme::title())
            .border_style(theme::border_focused()),
    );
    f.render_widget(p, area);
}

/// A rectangle of the given percentage size centered in `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(r);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    area
}
