//! Check result input
//!
//! Results arrive as a JSON document produced by the check runners:
//!
//! ```json
//! {
//!   "apps": [
//!     {
//!       "name": "myapp",
//!       "removed": false,
//!       "results": [
//!         { "state": "error", "summary": "diff failed", "details": "..." }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! [`feed`] replays a document into a [`Message`] with one producer thread per
//! application, the way checks report in a live run.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use serde::Deserialize;
use thiserror::Error;

use crate::core::models::{CheckResult, CheckState};
use crate::core::ports::Tracer;
use crate::core::services::{Message, MessageError, Traced};

/// Errors reading a results document
#[derive(Debug, Error)]
pub enum InputError {
    /// File could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// File is not a valid results document
    #[error("invalid results file {path}: {source}")]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },
}

/// A whole results document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultsFile {
    /// Applications and their results
    #[serde(default)]
    pub apps: Vec<AppEntry>,
}

/// One application's results
#[derive(Debug, Clone, Deserialize)]
pub struct AppEntry {
    /// Application name
    pub name: String,
    /// The application was removed during the run and must not be reported
    #[serde(default)]
    pub removed: bool,
    /// Results in the order they completed
    #[serde(default)]
    pub results: Vec<ResultEntry>,
}

/// One check result as written by a runner
#[derive(Debug, Clone, Deserialize)]
pub struct ResultEntry {
    /// State name, e.g. `"failure"`
    #[serde(default)]
    pub state: String,
    /// One-line summary
    #[serde(default)]
    pub summary: String,
    /// Detail body
    #[serde(default)]
    pub details: String,
}

impl ResultEntry {
    /// Convert to a [`CheckResult`]
    ///
    /// An unrecognised state is reported as [`CheckState::Error`] so the
    /// report is still produced and the run does not pass by accident.
    #[must_use]
    pub fn to_result(&self, app: &str) -> CheckResult {
        let state = self.state.parse().unwrap_or_else(|e| {
            log::warn!("{app}: {e}; reporting as error");
            CheckState::Error
        });
        CheckResult::new(state, self.summary.clone(), self.details.clone())
    }
}

impl ResultsFile {
    /// Read a results document from disk
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let content = fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| InputError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a results document from JSON text
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

/// Outcome of feeding a results document
#[derive(Debug, Default)]
pub struct FeedReport {
    /// Results accepted by the message
    pub recorded: usize,
    /// Results the message rejected
    pub errors: Vec<MessageError>,
}

/// Record every entry of `file` into `message`, one thread per application
///
/// Removed applications are suppressed after their results are written, the
/// same late removal a live run sees. A rejected result is logged and counted
/// without stopping the other applications.
pub fn feed<T: Tracer + ?Sized>(message: &Message, tracer: &T, file: &ResultsFile) -> FeedReport {
    let traced = &Traced::new(message, tracer);

    let outcomes: Vec<(usize, Vec<MessageError>)> = thread::scope(|scope| {
        let handles: Vec<_> = file
            .apps
            .iter()
            .map(|entry| scope.spawn(move || produce(traced, entry)))
            .collect();
        handles
            .into_iter()
            .zip(&file.apps)
            .map(|(h, entry)| {
                h.join().unwrap_or_else(|_| {
                    log::error!("recording results for app {} panicked", entry.name);
                    (0, Vec::new())
                })
            })
            .collect()
    });

    let mut report = FeedReport::default();
    for (recorded, errors) in outcomes {
        report.recorded += recorded;
        for e in errors {
            log::warn!("{e}");
            report.errors.push(e);
        }
    }
    report
}

fn produce<T: Tracer + ?Sized>(
    traced: &Traced<'_, T>,
    entry: &AppEntry,
) -> (usize, Vec<MessageError>) {
    traced.register_app(&entry.name);

    let mut recorded = 0;
    let mut errors = Vec::new();
    for result in &entry.results {
        match traced.add_result(&entry.name, result.to_result(&entry.name)) {
            Ok(()) => recorded += 1,
            Err(e) => errors.push(e),
        }
    }

    if entry.removed {
        traced.suppress(&entry.name);
    }
    (recorded, errors)
}
