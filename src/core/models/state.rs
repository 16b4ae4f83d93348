//! Check states
//!
//! A check's outcome, ordered from least to most severe. The ordering is what
//! makes a whole validation run reducible to a single verdict.

use serde::{Deserialize, Serialize};

/// Outcome of a single check, ordered by severity
///
/// `None < Success < Running < Warning < Failure < Error < Panic`.
/// `None` is the neutral element of [`CheckState::worst`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    /// No verdict; never overrides anything
    #[default]
    None,
    /// Check passed
    Success,
    /// Check is still in progress
    Running,
    /// Check passed with something worth a look
    Warning,
    /// Check ran and found a problem
    Failure,
    /// Check could not complete
    Error,
    /// Check crashed
    Panic,
}

impl CheckState {
    /// Every state, least severe first
    pub const ALL: [Self; 7] = [
        Self::None,
        Self::Success,
        Self::Running,
        Self::Warning,
        Self::Failure,
        Self::Error,
        Self::Panic,
    ];

    /// The state's name as shown in report headers (e.g. `"Error"`)
    #[must_use]
    pub const fn bare_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Success => "Success",
            Self::Running => "Running",
            Self::Warning => "Warning",
            Self::Failure => "Failure",
            Self::Error => "Error",
            Self::Panic => "Panic",
        }
    }

    /// The more severe of two states
    #[must_use]
    pub fn worst(self, other: Self) -> Self {
        self.max(other)
    }
}

/// Reduce any number of states to the most severe one, starting from `None`
#[must_use]
pub fn worst_of<I>(states: I) -> CheckState
where
    I: IntoIterator<Item = CheckState>,
{
    states.into_iter().fold(CheckState::None, CheckState::worst)
}

impl std::fmt::Display for CheckState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.bare_str())
    }
}

impl std::str::FromStr for CheckState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "" => Ok(Self::None),
            "success" => Ok(Self::Success),
            "running" => Ok(Self::Running),
            "warning" => Ok(Self::Warning),
            "failure" => Ok(Self::Failure),
            "error" => Ok(Self::Error),
            "panic" => Ok(Self::Panic),
            _ => Err(format!(
                "Invalid state: {s}. Use: none, success, running, warning, failure, error, panic"
            )),
        }
    }
}
