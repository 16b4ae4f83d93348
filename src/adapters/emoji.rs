//! Emoji markers
//!
//! The markers GitHub and GitLab comments use for each check state.

use serde::{Deserialize, Serialize};

use crate::core::models::CheckState;
use crate::core::ports::StateMarker;

/// Which VCS's emoji set to decorate the report with
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum EmojiStyle {
    /// GitHub shortcodes
    #[default]
    Github,
    /// GitLab shortcodes
    Gitlab,
}

impl EmojiStyle {
    /// Marker implementation for this style
    #[must_use]
    pub fn marker(self) -> Box<dyn StateMarker> {
        match self {
            Self::Github => Box::new(GithubEmoji),
            Self::Gitlab => Box::new(GitlabEmoji),
        }
    }
}

/// GitHub comment emoji
#[derive(Debug, Clone, Copy, Default)]
pub struct GithubEmoji;

impl StateMarker for GithubEmoji {
    fn marker(&self, state: CheckState) -> String {
        match state {
            CheckState::None => "",
            CheckState::Success => ":white_check_mark:",
            CheckState::Running => ":runner:",
            CheckState::Warning => ":warning:",
            CheckState::Failure => ":red_circle:",
            CheckState::Error => ":heavy_exclamation_mark:",
            CheckState::Panic => ":skull:",
        }
        .to_string()
    }
}

/// GitLab comment emoji
#[derive(Debug, Clone, Copy, Default)]
pub struct GitlabEmoji;

impl StateMarker for GitlabEmoji {
    fn marker(&self, state: CheckState) -> String {
        match state {
            CheckState::None => "",
            CheckState::Success => ":white_check_mark:",
            CheckState::Running => ":runner:",
            CheckState::Warning => ":warning:",
            CheckState::Failure => ":x:",
            CheckState::Error => ":exclamation:",
            CheckState::Panic => ":skull:",
        }
        .to_string()
    }
}
