//! Zoom panel: details of the focused cell's image, or of the last focused
//! cell once focus has been cleared.

use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Paragraph, Wrap},
};

use crate::app::App;
use crate::ui::theme;

pub fn render_zoom(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::bordered()
        .title(" Zoom ")
        .title_style(theme::title())
        .border_style(theme::border());

    let pos = app.grid.focus().unwrap_or(app.grid.last_focus());
    let mut lines = Vec::new();
    let image = app.zoomed_image();
    lines.push(Line::styled(image.name.clone(), theme::title()));
    match &image.path {
        Some(path) => lines.push(Line::styled(path.display().to_string(), theme::text_dim())),
        None => lines.push(Line::styled("(no image)", theme::text_dim())),
    }
    lines.push(Line::raw(""));
    lines.push(Line::raw(format!("Cell: row {}, col {}", pos.row + 1, pos.col + 1)));

    let cell = app.grid.cell(pos).copied().unwrap_or_default();
    let status = match (cell.grouped, cell.mark) {
        (false, _) => "not grouped".to_string(),
        (true, None) => "grouped".to_string(),
        (true, Some(mark)) => format!("grouped {}", theme::mark_tag(mark)),
    };
    lines.push(Line::raw(format!("Status: {status}")));
    if app.grid.focus().is_none() {
        lines.push(Line::styled("No focused cell", theme::text_dim()));
    }

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
