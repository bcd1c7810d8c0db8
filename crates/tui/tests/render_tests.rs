//! Rendering tests using ratatui's `TestBackend`.

mod helpers;

use gridnav_tui::grid::Position;
use helpers::*;

#[test]
fn test_render_shows_visible_images_only() {
    let mut harness = TuiHarness::new(120, 36, app_with_grid(2));
    let out = harness.render();
    for name in ["img00.png", "img01.png", "img02.png", "img03.png"] {
        assert!(out.contains(name), "missing {name}\n{out}");
    }
    assert!(!out.contains("img04.png"));
}

#[test]
fn test_render_titles_and_footer() {
    let mut harness = TuiHarness::new(120, 36, app_with_grid(3));
    let out = harness.render();
    assert!(out.contains("Images (3 x 3)"));
    assert!(out.contains("Zoom"));
    assert!(out.contains("grid 3 x 3 | grouped 0 | images 9"));
}

#[test]
fn test_render_mark_tag_and_group_count() {
    let mut app = app_with_grid(2);
    press(&mut app, enter_key());
    press(&mut app, key('k'));
    let mut harness = TuiHarness::new(120, 36, app);
    let out = harness.render();
    assert!(out.contains("[K]"));
    assert!(out.contains("grouped 1"));
}

#[test]
fn test_render_zoom_without_focus() {
    let mut app = app_with_grid(2);
    app.grid.press(Position::new(1, 1));
    app.grid.press(Position::new(1, 1));
    let mut harness = TuiHarness::new(120, 36, app);
    let out = harness.render();
    assert!(out.contains("No focused cell"));
    assert!(out.contains("Cell: row 2, col 2"));
}

#[test]
fn test_render_placeholder_when_no_images() {
    let app = gridnav_tui::App::new(
        gridnav_config::GridSize::new(2),
        gridnav_tui::ImageList::from_entries(Vec::new()),
        gridnav_tui::KeybindOverrideTable::default(),
    );
    let mut harness = TuiHarness::new(120, 36, app);
    let out = harness.render();
    assert!(out.contains("job_done.jpg"));
    assert!(out.contains("images 0"));
}

#[test]
fn test_render_after_complete_group_shows_remaining() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_grid(3)
        .with_results_log(gridnav_config::ResultsLog::new(dir.path().join("results.jsonl")));
    press(&mut app, enter_key());
    press(&mut app, key('c'));
    let mut harness = TuiHarness::new(120, 36, app);
    let out = harness.render();
    assert!(out.contains("images 8/9"));
    assert!(!out.contains("img00.png"));
    assert!(out.contains("img01.png"));
}

#[test]
fn test_render_help_popup() {
    let mut app = app_with_grid(2);
    press(&mut app, key('?'));
    let mut harness = TuiHarness::new(120, 40, app);
    let out = harness.render();
    assert!(out.contains("Help"));
    assert!(out.contains("Navigation"));
    assert!(out.contains("Click move-left"));
}

#[test]
fn test_render_small_terminal_does_not_panic() {
    let mut harness = TuiHarness::new(20, 8, app_with_grid(7));
    harness.render();
}
