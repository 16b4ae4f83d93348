//! checkreport - Pull-request reports from CI check results
//!
//! Collects per-application check results and renders them into a single
//! deterministic markdown comment plus a pass/fail verdict.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_debug_implementations,
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

mod cli;
mod commands;

use std::process::ExitCode;

/// Main entry point for the checkreport CLI
fn main() -> ExitCode {
    let started_at = chrono::Utc::now();
    let hostname = checkreport::host::hostname();

    match cli::run(hostname, started_at) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        },
    }
}
