//! Command-line argument parsing for gridnav.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//!
//! Does NOT handle:
//! - Layering CLI values over env and file settings (see `runtime::config`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - All path arguments are resolved relative to the current working directory.

use clap::Parser;
use gridnav_config::GridSize;
use std::path::PathBuf;

/// Command-line arguments for gridnav.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --grid-size, --image-dir)
/// 2. Environment variables (GRIDNAV_GRID_SIZE, GRIDNAV_IMAGE_DIR)
/// 3. Persisted configuration (config.json)
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "gridnav",
    about = "Keyboard-driven image grid selector for the terminal",
    version,
    after_help = "Examples:\n  gridnav\n  gridnav --image-dir ~/Pictures/shoot --grid-size 4\n  gridnav --config-path /tmp/gridnav.json --fresh\n"
)]
pub struct Cli {
    /// Path to a custom configuration file
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Directory to load images from
    #[arg(long)]
    pub image_dir: Option<PathBuf>,

    /// Visible grid size, 2 to 7 (values outside the range are clamped)
    #[arg(long)]
    pub grid_size: Option<GridSize>,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,

    /// Start with fresh state, ignoring and not saving persisted state
    #[arg(long)]
    pub fresh: bool,
}
