//! Result aggregate
//!
//! A [`Message`] collects check results for every application in a validation
//! run. Producers on many threads register applications and record results as
//! checks complete; a consumer reads the worst state or renders the report.
//!
//! Removing an application is done by suppression rather than deletion: the
//! name goes into a tombstone set that every read and write path consults, so
//! a producer still writing for that application never races a delete.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use super::render::{RenderOptions, render_comment};
use crate::core::models::{AppResults, CheckResult, CheckState, worst_of};
use crate::core::ports::StateMarker;

/// Errors returned by [`Message`] operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// A result was recorded for an application that was never registered
    #[error("application not registered: {0}")]
    UnregisteredApplication(String),
}

#[derive(Debug, Default)]
struct Registry {
    apps: HashMap<String, AppResults>,
    suppressed: HashSet<String>,
}

/// Concurrency-safe registry of per-application check results
pub struct Message {
    /// Display name of the run
    pub name: String,
    /// Check run identifier, used by whoever delivers the report
    pub check_id: u64,
    /// Comment/note identifier, used by whoever delivers the report
    pub note_id: u64,
    marker: Box<dyn StateMarker>,
    registry: Mutex<Registry>,
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Message")
            .field("name", &self.name)
            .field("check_id", &self.check_id)
            .field("note_id", &self.note_id)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl Message {
    /// Create an empty aggregate
    pub fn new(
        name: impl Into<String>,
        check_id: u64,
        note_id: u64,
        marker: impl StateMarker + 'static,
    ) -> Self {
        Self::with_marker(name, check_id, note_id, Box::new(marker))
    }

    /// Create an empty aggregate around an already boxed marker
    pub fn with_marker(
        name: impl Into<String>,
        check_id: u64,
        note_id: u64,
        marker: Box<dyn StateMarker>,
    ) -> Self {
        Self {
            name: name.into(),
            check_id,
            note_id,
            marker,
            registry: Mutex::new(Registry::default()),
        }
    }

    // Every critical section leaves the registry consistent, so a panic
    // elsewhere while holding the lock does not invalidate it.
    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Give `app` an empty result set
    ///
    /// Does nothing if `app` is suppressed. Registering an application that
    /// already has results resets them, so call this once per application
    /// before recording anything for it.
    pub fn register_app(&self, app: &str) {
        let mut registry = self.lock();
        if registry.suppressed.contains(app) {
            log::debug!("not registering suppressed app {app}");
            return;
        }
        registry.apps.insert(app.to_string(), AppResults::new());
    }

    /// Append `result` to `app`'s results
    ///
    /// Does nothing if `app` is suppressed. Results for one application keep
    /// the order in which their calls acquired the lock.
    pub fn add_result(&self, app: &str, result: CheckResult) -> Result<(), MessageError> {
        let mut registry = self.lock();
        if registry.suppressed.contains(app) {
            log::debug!("dropping result for suppressed app {app}");
            return Ok(());
        }
        match registry.apps.get_mut(app) {
            Some(results) => {
                results.push(result);
                Ok(())
            },
            None => Err(MessageError::UnregisteredApplication(app.to_string())),
        }
    }

    /// Exclude `app` from the worst state and the report, permanently
    ///
    /// `app` does not need to be registered. Recorded results are kept but
    /// never shown.
    pub fn suppress(&self, app: &str) {
        log::debug!("suppressing app {app}");
        self.lock().suppressed.insert(app.to_string());
    }

    /// Whether `app` has been suppressed
    #[must_use]
    pub fn is_suppressed(&self, app: &str) -> bool {
        self.lock().suppressed.contains(app)
    }

    /// Most severe state across all non-suppressed applications
    ///
    /// `None` when there is nothing to report.
    #[must_use]
    pub fn worst_state(&self) -> CheckState {
        let registry = self.lock();
        worst_of(
            registry
                .apps
                .iter()
                .filter(|(app, _)| !registry.suppressed.contains(*app))
                .flat_map(|(_, results)| results.results().iter().map(|r| r.state)),
        )
    }

    /// Sorted names of the applications that will appear in the report
    #[must_use]
    pub fn app_names(&self) -> Vec<String> {
        self.snapshot().visible().map(|(app, _)| app.to_string()).collect()
    }

    /// Copy of the current contents, taken under the lock
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let registry = self.lock();
        Snapshot {
            apps: registry
                .apps
                .iter()
                .map(|(app, results)| (app.clone(), results.clone()))
                .collect(),
            suppressed: registry.suppressed.iter().cloned().collect(),
        }
    }

    /// Render the report with this message's marker
    ///
    /// The marker is only consulted after the lock has been released.
    #[must_use]
    pub fn build_comment(&self, options: &RenderOptions) -> String {
        let snapshot = self.snapshot();
        render_comment(&snapshot, self.marker.as_ref(), options)
    }
}

/// Point-in-time copy of a [`Message`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    apps: BTreeMap<String, AppResults>,
    suppressed: BTreeSet<String>,
}

impl Snapshot {
    /// Non-suppressed applications in ordinal name order
    pub fn visible(&self) -> impl Iterator<Item = (&str, &AppResults)> {
        self.apps
            .iter()
            .filter(|(app, _)| !self.suppressed.contains(*app))
            .map(|(app, results)| (app.as_str(), results))
    }

    /// Whether `app` was suppressed when the snapshot was taken
    #[must_use]
    pub fn is_suppressed(&self, app: &str) -> bool {
        self.suppressed.contains(app)
    }
}
