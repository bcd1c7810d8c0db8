//! Image list backing the grid cells.
//!
//! Responsibilities:
//! - List image files from a directory, sorted by file name.
//! - Pad the list with a placeholder so every grid cell has an entry.
//! - Hide images of completed groups from later grids.
//!
//! Invariants:
//! - The list always has at least `N_GRID` entries.
//! - A file counts as an image if its name contains one of `IMAGE_TYPES`.
//! - Grid cells index the unmasked entries only, in list order; cells past
//!   the last unmasked entry show the placeholder.

use std::path::{Path, PathBuf};

use gridnav_config::constants::{EMPTY_IMAGE, IMAGE_TYPES, N_GRID};

use crate::grid::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub name: String,
    /// `None` for the placeholder.
    pub path: Option<PathBuf>,
}

impl ImageEntry {
    pub fn placeholder() -> Self {
        Self {
            name: EMPTY_IMAGE.to_string(),
            path: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.path.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageList {
    entries: Vec<ImageEntry>,
    /// Parallel to `entries`; true once the entry's group was completed.
    masked: Vec<bool>,
    /// Number of real images found.
    found: usize,
    placeholder: ImageEntry,
}

pub fn is_image(file_name: &str) -> bool {
    IMAGE_TYPES.iter().any(|ext| file_name.contains(ext))
}

impl ImageList {
    /// Build from already-known entries, padding with placeholders.
    pub fn from_entries(mut entries: Vec<ImageEntry>) -> Self {
        let found = entries.len();
        if entries.len() < N_GRID {
            entries.resize(N_GRID, ImageEntry::placeholder());
        }
        Self {
            masked: vec![false; entries.len()],
            entries,
            found,
            placeholder: ImageEntry::placeholder(),
        }
    }

    /// List images in `dir`.
    ///
    /// An unreadable directory yields an all-placeholder list.
    pub fn load(dir: &Path) -> Self {
        let read_dir = match std::fs::read_dir(dir) {
            Ok(read_dir) => read_dir,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "Cannot read image directory");
                return Self::from_entries(Vec::new());
            }
        };

        let mut entries: Vec<ImageEntry> = read_dir
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
            .filter_map(|entry| {
                let name = entry.file_name().to_string_lossy().into_owned();
                if is_image(&name) {
                    Some(ImageEntry {
                        name,
                        path: Some(entry.path()),
                    })
                } else {
                    tracing::warn!(file = %name, "Ignoring non-image file");
                    None
                }
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        tracing::info!(dir = %dir.display(), count = entries.len(), "Loaded images");
        Self::from_entries(entries)
    }

    pub fn found(&self) -> usize {
        self.found
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageEntry> {
        self.entries.get(index)
    }

    /// Unmasked entries, in list order.
    pub fn available(&self) -> impl Iterator<Item = &ImageEntry> + '_ {
        self.entries
            .iter()
            .zip(&self.masked)
            .filter(|(_, masked)| !**masked)
            .map(|(entry, _)| entry)
    }

    /// Number of real images not yet in a completed group.
    pub fn remaining(&self) -> usize {
        self.available().filter(|e| !e.is_placeholder()).count()
    }

    /// Image shown in a cell when the grid is `cols` wide (row-major).
    pub fn for_cell(&self, pos: Position, cols: usize) -> &ImageEntry {
        self.available()
            .nth(pos.row * cols + pos.col)
            .unwrap_or(&self.placeholder)
    }

    /// Mask the entries shown at the given visible grid indices.
    ///
    /// Indices count unmasked entries only, as they were numbered before
    /// this call.
    pub fn mask_visible(&mut self, indices: &[usize]) {
        apply_group_mask(&mut self.masked, indices);
    }

    /// Mask every real entry whose file name is in `names`.
    pub fn mask_names<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        let names: std::collections::HashSet<&str> = names.into_iter().collect();
        for (entry, masked) in self.entries.iter().zip(self.masked.iter_mut()) {
            if !entry.is_placeholder() && names.contains(entry.name.as_str()) {
                *masked = true;
            }
        }
    }
}

/// Fold one completed group into `mask`.
///
/// `group` holds positions among the entries still unmasked when the
/// group was completed.
fn apply_group_mask(mask: &mut [bool], group: &[usize]) {
    let mut available = 0;
    for masked in mask.iter_mut().filter(|m| !**m) {
        if group.contains(&available) {
            *masked = true;
        }
        available += 1;
    }
}

/// Replay a history of completed groups into a flat mask of `len` entries.
///
/// Groups are applied oldest first; each group's positions refer to the
/// entries left unmasked by the groups before it.
pub fn flat_mask(groups: &[Vec<usize>], len: usize) -> Vec<bool> {
    let mut mask = vec![false; len];
    for group in groups {
        apply_group_mask(&mut mask, group);
    }
    mask
}
