//! Shared test fixtures and helpers

use checkreport::core::models::{CheckResult, CheckState};
use checkreport::core::services::Message;

/// Marker that ignores the state, like a VCS with a single emoji
pub fn test_marker(_: CheckState) -> String {
    ":test:".to_string()
}

/// Marker that spells the state out, so tests can see which one was used
pub fn named_marker(state: CheckState) -> String {
    format!("[{state}]")
}

/// Empty message using [`test_marker`]
pub fn message() -> Message {
    Message::new("message", 1, 2, test_marker)
}

/// Shorthand for a result
pub fn result(state: CheckState, summary: &str, details: &str) -> CheckResult {
    CheckResult::new(state, summary, details)
}

/// Register `app` and record `results` for it
pub fn record(message: &Message, app: &str, results: &[CheckResult]) {
    message.register_app(app);
    for r in results {
        message.add_result(app, r.clone()).unwrap();
    }
}
