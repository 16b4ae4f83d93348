//! Centralized path definitions for checkreport
//!
//! ## Layout
//!
//! ```text
//! repo/
//! └── .checkreport.toml          # Project config (committed)
//!
//! ~/.config/checkreport/
//! └── config.toml                # User-level fallback
//! ```

use std::path::{Path, PathBuf};

/// Project configuration filename
pub const PROJECT_CONFIG: &str = ".checkreport.toml";

/// Global configuration filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Directory name under the user's config dir
const APP_DIR: &str = "checkreport";

/// Get path to the project config inside `root`
#[must_use]
pub fn project_config(root: &Path) -> PathBuf {
    root.join(PROJECT_CONFIG)
}

/// Get the global config directory (`~/.config/checkreport`)
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

/// Get path to the global config file
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
