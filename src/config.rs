//! Report configuration
//!
//! Read from `.checkreport.toml` in the working directory, falling back to
//! `~/.config/checkreport/config.toml`, falling back to defaults. Every key is
//! optional.
//!
//! ```toml
//! title = "Kubechecks Report"
//! heading = "ArgoCD Application Checks"
//! show_debug_info = false
//! label_filter = "prod"
//! fail_on = "failure"
//! emoji = "github"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::EmojiStyle;
use crate::core::models::CheckState;
use crate::core::services::RenderOptions;
use crate::core::services::render::{DEFAULT_HEADING, DEFAULT_TITLE};
use crate::paths;

/// Errors loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has wrong types
    #[error("invalid config {path}: {source}")]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },
}

/// Report settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Report title
    pub title: String,
    /// Application section heading prefix
    pub heading: String,
    /// Use the detailed footer (pod, duration, build)
    pub show_debug_info: bool,
    /// Label filter the run was scoped to, shown in the debug footer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_filter: Option<String>,
    /// Lowest state that fails the run
    pub fail_on: CheckState,
    /// Emoji set used for markers
    pub emoji: EmojiStyle,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            heading: DEFAULT_HEADING.to_string(),
            show_debug_info: false,
            label_filter: None,
            fail_on: CheckState::Failure,
            emoji: EmojiStyle::default(),
        }
    }
}

impl ReportConfig {
    /// Load the first config found for `root`, or defaults
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let candidates = [paths::project_config(root), paths::global_config()];
        for path in candidates {
            if path.exists() {
                log::debug!("loading config from {}", path.display());
                return Self::load_from(&path);
            }
        }
        Ok(Self::default())
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Whether `state` should fail the run
    #[must_use]
    pub fn fails(&self, state: CheckState) -> bool {
        state != CheckState::None && state >= self.fail_on
    }

    /// Render options for this config, without a footer
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            title: self.title.clone(),
            heading: self.heading.clone(),
            footer: None,
        }
    }
}
