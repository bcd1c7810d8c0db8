//! UI rendering for the TUI.
//!
//! Responsibilities:
//! - Lay out the grid panel, the zoom panel, and the footer.
//! - Draw the help popup over everything when it is open.
//!
//! Does NOT handle:
//! - Mutating application state; rendering reads `App` only.

pub mod footer;
pub mod grid_view;
pub mod popup;
pub mod theme;
pub mod zoom;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use crate::app::App;

/// Footer height in rows, including its top border.
pub const FOOTER_HEIGHT: u16 = 3;

/// Top-level panel areas for a frame of the given size.
///
/// Shared by rendering and mouse hit-testing so both agree on where the
/// grid is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    pub grid: Rect,
    pub zoom: Rect,
    pub footer: Rect,
}

impl FrameLayout {
    pub fn new(area: Rect) -> Self {
        let [main, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)]).areas(area);
        let [grid, zoom] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(main);
        Self { grid, zoom, footer }
    }
}

/// Draw one frame.
pub fn render(f: &mut Frame, app: &App) {
    let FrameLayout {
        grid: grid_area,
        zoom: zoom_area,
        footer: footer_area,
    } = FrameLayout::new(f.area());

    grid_view::render_grid(f, grid_area, app);
    zoom::render_zoom(f, zoom_area, app);
    footer::render_footer(f, footer_area, app);

    if app.show_help {
        popup::render_help(f, app);
    }
}
