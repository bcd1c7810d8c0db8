//! Image grid panel.
//!
//! Each visible cell is a bordered box holding its image's file name.
//! The focused cell gets a thick blue border, grouped cells a red one,
//! and marked cells show their `[K]`/`[D]` tag.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
};

use crate::app::App;
use crate::grid::{FocusGrid, Position};
use crate::ui::theme;

fn panel_block(grid: &FocusGrid) -> Block<'static> {
    Block::bordered()
        .title(format!(" Images ({}) ", grid.size()))
        .title_style(theme::title())
        .border_style(theme::border())
}

/// Areas of the visible cells inside the grid panel, row-major.
fn cell_areas(area: Rect, grid: &FocusGrid) -> Vec<(Position, Rect)> {
    let inner = panel_block(grid).inner(area);
    let rows = grid.rows();
    let cols = grid.cols();
    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(inner);
    let mut cells = Vec::with_capacity(rows * cols);
    for (row, row_area) in row_areas.iter().enumerate() {
        let col_areas =
            Layout::horizontal(vec![Constraint::Ratio(1, cols as u32); cols]).split(*row_area);
        for (col, cell_area) in col_areas.iter().enumerate() {
            cells.push((Position::new(row, col), *cell_area));
        }
    }
    cells
}

/// Visible cell under the terminal coordinate (`column`, `row`), if any.
pub fn cell_at(area: Rect, grid: &FocusGrid, column: u16, row: u16) -> Option<Position> {
    cell_areas(area, grid)
        .into_iter()
        .find(|(_, cell_area)| {
            column >= cell_area.x
                && column < cell_area.right()
                && row >= cell_area.y
                && row < cell_area.bottom()
        })
        .map(|(pos, _)| pos)
}

pub fn render_grid(f: &mut Frame, area: Rect, app: &App) {
    f.render_widget(panel_block(&app.grid), area);
    for (pos, cell_area) in cell_areas(area, &app.grid) {
        render_cell(f, cell_area, app, pos);
    }
}

fn render_cell(f: &mut Frame, area: Rect, app: &App, pos: Position) {
    let cell = app.grid.cell(pos).copied().unwrap_or_default();
    let focused = app.grid.is_focused(pos);

    let mut block = Block::bordered();
    block = if focused {
        block
            .border_type(BorderType::Thick)
            .border_style(theme::border_focused())
    } else if cell.grouped {
        block.border_style(theme::border_grouped())
    } else {
        block.border_style(theme::border())
    };

    let mut lines = Vec::new();
    let image = app.images.for_cell(pos, app.grid.cols());
    let style = if image.is_placeholder() {
        theme::text_dim()
    } else {
        theme::text()
    };
    lines.push(Line::styled(image.name.clone(), style));
    if let Some(mark) = cell.mark {
        lines.push(Line::from(Span::styled(
            theme::mark_tag(mark),
            theme::mark(mark),
        )));
    }

    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}
