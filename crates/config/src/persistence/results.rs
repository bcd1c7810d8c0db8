//! Completed-group results log.
//!
//! Responsibilities:
//! - Append one JSON record per image when a group is completed.
//! - Read the log back, e.g. to hide already-completed images.
//!
//! Does NOT handle:
//! - Deciding which images belong to a group (see the TUI crate).
//! - Deleting or moving image files; marks are only recorded.
//!
//! Invariants:
//! - The file is JSON Lines: one `GroupRecord` per line, append-only.
//! - All records written by one `append` call share a `group_id`.
//! - A missing file reads as an empty log.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name of the results log, placed next to `config.json`.
pub const RESULTS_FILE_NAME: &str = "results.jsonl";

/// One image of a completed group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRecord {
    /// Shared by every image of the group; the completion time in milliseconds.
    pub group_id: i64,
    pub filename: String,
    pub directory_name: PathBuf,
    /// True if the image was marked Keep.
    pub keep: bool,
    pub modified_time: DateTime<Utc>,
}

impl GroupRecord {
    /// Records for one group completed at `modified_time`.
    ///
    /// `images` holds `(filename, keep)` pairs in grid order.
    pub fn group(
        directory_name: &Path,
        images: &[(String, bool)],
        modified_time: DateTime<Utc>,
    ) -> Vec<GroupRecord> {
        let group_id = modified_time.timestamp_millis();
        images
            .iter()
            .map(|(filename, keep)| GroupRecord {
                group_id,
                filename: filename.clone(),
                directory_name: directory_name.to_path_buf(),
                keep: *keep,
                modified_time,
            })
            .collect()
    }
}

#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("Failed to access results log at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize group record")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to parse results log at {path}, line {line}")]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Append-only JSON Lines file of completed groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsLog {
    path: PathBuf,
}

impl ResultsLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> ResultsError {
        ResultsError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Append records, creating the file and its directory if needed.
    pub fn append(&self, records: &[GroupRecord]) -> Result<(), ResultsError> {
        if records.is_empty() {
            return Ok(());
        }

        let mut buf = String::new();
        for record in records {
            buf.push_str(&serde_json::to_string(record).map_err(ResultsError::Serialize)?);
            buf.push('\n');
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        file.write_all(buf.as_bytes())
            .map_err(|e| self.io_error(e))?;

        tracing::info!(
            path = %self.path.display(),
            count = records.len(),
            "Appended group records"
        );
        Ok(())
    }

    /// Read every record, oldest first. Blank lines are skipped.
    pub fn read_all(&self) -> Result<Vec<GroupRecord>, ResultsError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                serde_json::from_str(line).map_err(|source| ResultsError::Parse {
                    path: self.path.clone(),
                    line: idx + 1,
                    source,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn test_group_shares_id_and_directory() {
        let records = GroupRecord::group(
            Path::new("/pics"),
            &[("a.jpg".to_string(), true), ("b.jpg".to_string(), false)],
            at(1_700_000_000_123),
        );
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.group_id == 1_700_000_000_123));
        assert!(records.iter().all(|r| r.directory_name == Path::new("/pics")));
        assert!(records[0].keep);
        assert!(!records[1].keep);
    }

    #[test]
    fn test_missing_log_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = ResultsLog::new(dir.path().join("results.jsonl"));
        assert!(log.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_accumulates_lines() {
        let dir = tempfile::tempdir().unwrap();
        let log = ResultsLog::new(dir.path().join("sub").join("results.jsonl"));
        let first = GroupRecord::group(Path::new("/p"), &[("a.png".to_string(), true)], at(1));
        let second = GroupRecord::group(Path::new("/p"), &[("b.png".to_string(), false)], at(2));

        log.append(&first).unwrap();
        log.append(&second).unwrap();
        log.append(&[]).unwrap();

        let content = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(content.lines().count(), 2);
        let all = log.read_all().unwrap();
        assert_eq!(all, [first, second].concat());
    }

    #[test]
    fn test_bad_line_reports_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let log = ResultsLog::new(dir.path().join("results.jsonl"));
        let good = GroupRecord::group(Path::new("/p"), &[("a.png".to_string(), true)], at(1));
        log.append(&good).unwrap();
        let mut file = OpenOptions::new().append(true).open(log.path()).unwrap();
        writeln!(file, "not json").unwrap();

        let err = log.read_all().unwrap_err();
        assert!(matches!(err, ResultsError::Parse { line: 2, .. }));
    }
}
