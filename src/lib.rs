//! checkreport - Aggregate per-application CI check results into a single
//! pull-request report
//!
//! Check runners record results concurrently into a [`Message`]; once they
//! are done the message reduces to one worst state for gating and renders a
//! deterministic markdown comment.
//!
//! [`Message`]: crate::core::services::Message

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod host;
pub mod input;
pub mod output;
pub mod paths;
