//! Completing a group: results log records, image masking, grid reset.

mod helpers;

use std::path::{Path, PathBuf};

use chrono::{TimeZone, Utc};
use gridnav_config::{GroupRecord, ResultsLog};
use gridnav_tui::App;
use gridnav_tui::grid::Position;
use helpers::*;

fn results_path(dir: &Path) -> PathBuf {
    dir.join("results.jsonl")
}

/// `n x n` app over the numbered images in "shots", logging to `dir`.
fn app_logging_to(n: usize, dir: &Path) -> App {
    let mut app = app_with_grid(n);
    app.image_dir = Some(PathBuf::from("shots"));
    app.with_results_log(ResultsLog::new(results_path(dir)))
}

fn cell_name(app: &App, row: usize, col: usize) -> String {
    app.images
        .for_cell(Position::new(row, col), app.grid.cols())
        .name
        .clone()
}

#[test]
fn test_complete_group_records_marks_and_hides_images() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_logging_to(3, dir.path());

    press(&mut app, enter_key());
    press(&mut app, key('k'));
    press(&mut app, right_key());
    press(&mut app, down_key());
    press(&mut app, enter_key());
    press(&mut app, key('d'));
    press(&mut app, key('c'));

    let records = ResultsLog::new(results_path(dir.path())).read_all().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].filename, "img00.png");
    assert!(records[0].keep);
    assert_eq!(records[1].filename, "img04.png");
    assert!(!records[1].keep);
    assert_eq!(records[0].group_id, records[1].group_id);
    assert!(records.iter().all(|r| r.directory_name == Path::new("shots")));

    assert_eq!(app.grid.grouped().count(), 0);
    assert_eq!(app.grid.focus(), Some(Position::default()));
    assert_eq!(app.images.remaining(), 7);
    assert_eq!(cell_name(&app, 0, 0), "img01.png");
    assert_eq!(cell_name(&app, 0, 2), "img03.png");
    assert_eq!(cell_name(&app, 1, 0), "img05.png");
}

#[test]
fn test_unmarked_grouped_cell_is_not_kept() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_logging_to(2, dir.path());
    press(&mut app, enter_key());
    press(&mut app, key('c'));

    let records = ResultsLog::new(results_path(dir.path())).read_all().unwrap();
    assert_eq!(records.len(), 1);
    assert!(!records[0].keep);
}

#[test]
fn test_later_groups_index_remaining_images() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_logging_to(3, dir.path());

    // Group cells 0 and 1, then cells 0, 1 and 2 of what is left.
    press(&mut app, enter_key());
    press(&mut app, right_key());
    press(&mut app, enter_key());
    press(&mut app, key('c'));
    assert_eq!(cell_name(&app, 0, 0), "img02.png");

    press(&mut app, enter_key());
    press(&mut app, right_key());
    press(&mut app, enter_key());
    press(&mut app, right_key());
    press(&mut app, enter_key());
    press(&mut app, key('c'));

    let names: Vec<_> = ResultsLog::new(results_path(dir.path()))
        .read_all()
        .unwrap()
        .into_iter()
        .map(|r| r.filename)
        .collect();
    assert_eq!(
        names,
        ["img00.png", "img01.png", "img02.png", "img03.png", "img04.png"]
    );
    assert_eq!(cell_name(&app, 0, 0), "img05.png");
    assert_eq!(app.images.remaining(), 4);
}

#[test]
fn test_nothing_grouped_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_logging_to(2, dir.path());
    press(&mut app, key('c'));

    assert!(!results_path(dir.path()).exists());
    assert_eq!(cell_name(&app, 0, 0), "img00.png");
    assert_eq!(app.grid.focus(), Some(Position::default()));
}

#[test]
fn test_placeholder_cells_are_not_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = App::new(
        gridnav_config::GridSize::new(2),
        numbered_images(2),
        gridnav_tui::KeybindOverrideTable::default(),
    )
    .with_results_log(ResultsLog::new(results_path(dir.path())));

    // Only the placeholder at (1, 1) is grouped: nothing to record.
    press(&mut app, down_key());
    press(&mut app, right_key());
    press(&mut app, enter_key());
    press(&mut app, key('c'));
    assert!(!results_path(dir.path()).exists());
    assert_eq!(app.grid.grouped().count(), 1);

    press(&mut app, up_key());
    press(&mut app, left_key());
    press(&mut app, enter_key());
    press(&mut app, key('c'));
    let records = ResultsLog::new(results_path(dir.path())).read_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].filename, "img00.png");
    assert_eq!(app.grid.grouped().count(), 0);
}

#[test]
fn test_failed_write_keeps_group() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the log file should be makes appends fail.
    let mut app = app_with_grid(2).with_results_log(ResultsLog::new(dir.path().to_path_buf()));
    press(&mut app, enter_key());
    press(&mut app, key('c'));

    assert_eq!(app.grid.grouped().count(), 1);
    assert_eq!(cell_name(&app, 0, 0), "img00.png");
}

#[test]
fn test_without_results_log_complete_is_ignored() {
    let mut app = app_with_grid(2);
    press(&mut app, enter_key());
    press(&mut app, key('c'));

    assert_eq!(app.grid.grouped().count(), 1);
    assert_eq!(app.images.remaining(), 4);
}

#[test]
fn test_previous_groups_for_same_directory_stay_hidden() {
    let dir = tempfile::tempdir().unwrap();
    let when = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
    let mut records = GroupRecord::group(Path::new("shots"), &[("img00.png".into(), true)], when);
    records.extend(GroupRecord::group(
        Path::new("elsewhere"),
        &[("img01.png".into(), false)],
        when,
    ));
    ResultsLog::new(results_path(dir.path()))
        .append(&records)
        .unwrap();

    let app = app_logging_to(2, dir.path());
    assert_eq!(cell_name(&app, 0, 0), "img01.png");
    assert_eq!(cell_name(&app, 0, 1), "img02.png");
    assert_eq!(app.images.remaining(), 3);
}
