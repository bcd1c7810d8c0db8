//! Centralized constants for the gridnav workspace.
//!
//! Default values used across crates, kept here to avoid magic number
//! duplication between the config loader and the TUI.

// =============================================================================
// Grid Dimensions
// =============================================================================

/// Maximum number of grid rows.
pub const ROWS_MAX: usize = 7;

/// Maximum number of grid columns.
pub const COLS_MAX: usize = 7;

/// Total number of cells in the (maximal) grid.
pub const N_GRID: usize = ROWS_MAX * COLS_MAX;

/// Smallest selectable square grid size.
pub const MIN_GRID_SIZE: usize = 2;

/// Grid size used when nothing else is configured.
pub const DEFAULT_GRID_SIZE: usize = 2;

// =============================================================================
// Images
// =============================================================================

/// File name fragments that identify an image file.
pub const IMAGE_TYPES: &[&str] = &[".JPG", ".jpg", ".JPEG", ".jpeg", ".png"];

/// Placeholder shown in cells that have no image of their own.
pub const EMPTY_IMAGE: &str = "job_done.jpg";

/// Default directory images are read from (relative to the working directory).
pub const DEFAULT_IMAGE_DIR: &str = "img";

// =============================================================================
// TUI Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 250;

// =============================================================================
// Environment Variables
// =============================================================================

/// Overrides the visible grid size.
pub const ENV_GRID_SIZE: &str = "GRIDNAV_GRID_SIZE";

/// Overrides the image directory.
pub const ENV_IMAGE_DIR: &str = "GRIDNAV_IMAGE_DIR";

/// Set to "1" or "true" to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
