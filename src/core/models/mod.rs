//! Domain models for checkreport
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`CheckState`] - Severity of a check outcome
//! - [`CheckResult`] - One check's outcome for one application
//! - [`AppResults`] - Ordered outcomes for one application

mod result;
mod state;

pub use result::{AppResults, CheckResult};
pub use state::{CheckState, worst_of};
