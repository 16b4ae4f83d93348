//! Check results
//!
//! A [`CheckResult`] is one check's outcome; [`AppResults`] is the ordered
//! list of outcomes collected for a single application.

use serde::Serialize;

use super::{CheckState, worst_of};

/// Outcome of one check against one application
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CheckResult {
    /// Severity of the outcome
    pub state: CheckState,
    /// One-line summary, shown as the block header
    pub summary: String,
    /// Full detail body (usually markdown)
    pub details: String,
}

impl CheckResult {
    /// Create a result
    pub fn new(state: CheckState, summary: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            state,
            summary: summary.into(),
            details: details.into(),
        }
    }
}

/// Results for one application, in the order they were recorded
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct AppResults {
    results: Vec<CheckResult>,
}

impl AppResults {
    /// Empty result set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    /// Append a result; display order is append order
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// All results, oldest first
    #[must_use]
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Number of recorded results
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether nothing has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Most severe state among this application's results
    #[must_use]
    pub fn worst_state(&self) -> CheckState {
        worst_of(self.results.iter().map(|r| r.state))
    }
}

impl FromIterator<CheckResult> for AppResults {
    fn from_iter<I: IntoIterator<Item = CheckResult>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}
