//! Footer with key hints and session counters.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::ui::theme;

const HINTS: [(&str, &str); 8] = [
    ("←↑→↓", "move"),
    ("Enter", "group"),
    ("k", "keep"),
    ("d", "delete"),
    ("c", "complete"),
    ("+/-", "size"),
    ("?", "help"),
    ("q", "quit"),
];

pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let mut hints = Vec::new();
    for (key, label) in HINTS {
        hints.push(Span::styled(key, theme::hint_key()));
        hints.push(Span::raw(format!(" {label}  ")));
    }

    let status = format!(
        "grid {} | grouped {} | images {}/{}",
        app.grid.size(),
        app.grid.grouped().count(),
        app.images.remaining(),
        app.images.found()
    );

    let lines = vec![
        Line::from(hints),
        Line::styled(status, theme::text_dim()),
    ];
    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::TOP)),
        area,
    );
}
