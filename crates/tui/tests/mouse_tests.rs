//! Left clicks on grid cells press them.

mod helpers;

use crossterm::event::{MouseButton, MouseEventKind};
use gridnav_tui::action::Action;
use gridnav_tui::grid::Position;
use helpers::*;

/// 2x2 app in a 100x40 terminal: the grid panel spans columns 0..60 and
/// rows 0..37.
fn clickable_app() -> gridnav_tui::App {
    let mut app = app_with_grid(2);
    app.update(Action::Resize(100, 40));
    app
}

#[test]
fn test_click_presses_cell_under_pointer() {
    let mut app = clickable_app();
    assert_eq!(
        app.handle_mouse(left_click(45, 28)),
        Some(Action::PressCellAt(Position::new(1, 1)))
    );

    app.update(Action::Mouse(left_click(45, 28)));
    let pos = Position::new(1, 1);
    assert!(app.grid.cell(pos).unwrap().grouped);
    assert_eq!(app.grid.focus(), Some(pos));

    // A second click on the focused grouped cell ungroups it.
    app.update(Action::Mouse(left_click(45, 28)));
    assert!(!app.grid.cell(pos).unwrap().grouped);
    assert_eq!(app.grid.focus(), None);
}

#[test]
fn test_clicks_outside_cells_are_ignored() {
    let mut app = clickable_app();
    // Grid border, zoom panel, footer.
    for (column, row) in [(0, 0), (80, 10), (10, 39)] {
        assert_eq!(app.handle_mouse(left_click(column, row)), None);
    }
    assert_eq!(app.grid.grouped().count(), 0);
}

#[test]
fn test_only_left_press_acts() {
    let mut app = clickable_app();
    for kind in [
        MouseEventKind::Down(MouseButton::Right),
        MouseEventKind::Up(MouseButton::Left),
        MouseEventKind::Moved,
        MouseEventKind::ScrollDown,
    ] {
        app.update(Action::Mouse(mouse(kind, 10, 5)));
    }
    assert_eq!(app.grid.grouped().count(), 0);
}

#[test]
fn test_click_closes_help_without_pressing() {
    let mut app = clickable_app();
    app.update(Action::ToggleHelp);
    app.update(Action::Mouse(left_click(10, 5)));
    assert!(!app.show_help);
    assert_eq!(app.grid.grouped().count(), 0);

    app.update(Action::Mouse(left_click(10, 5)));
    assert!(app.grid.cell(Position::default()).unwrap().grouped);
}

#[test]
fn test_clicks_follow_grid_resize() {
    let mut app = clickable_app();
    press(&mut app, key('+'));
    // With three columns the same point now falls in the middle column.
    app.update(Action::Mouse(left_click(30, 5)));
    assert!(app.grid.cell(Position::new(0, 1)).unwrap().grouped);
}

#[test]
fn test_clicks_before_first_resize_are_ignored() {
    let mut app = app_with_grid(2);
    assert_eq!(app.handle_mouse(left_click(10, 5)), None);
}
