//! Tracing port
//!
//! Span start/end hooks wrapped around the aggregate's public operations by
//! [`Traced`](crate::core::services::Traced). Tracing is instrumentation only:
//! a tracer error is logged and otherwise ignored.

use std::time::Duration;

use thiserror::Error;

/// Span emitted when an application is registered
pub const SPAN_ADD_NEW_APP: &str = "AddNewApp";

/// Span emitted when a result is recorded
pub const SPAN_ADD_TO_APP_MESSAGE: &str = "AddToAppMessage";

/// Span emitted when the report is rendered
pub const SPAN_BUILD_COMMENT: &str = "buildComment";

/// A tracer could not start or end a span
#[derive(Debug, Error)]
#[error("tracer failed on span {span}: {reason}")]
pub struct TraceError {
    /// Span the failure happened on
    pub span: &'static str,
    /// What went wrong
    pub reason: String,
}

/// Span sink
#[cfg_attr(test, mockall::automock)]
pub trait Tracer: Send + Sync {
    /// A span named `span` is starting
    fn start(&self, span: &'static str) -> Result<(), TraceError>;

    /// The span named `span` finished after `elapsed`
    fn end(&self, span: &'static str, elapsed: Duration) -> Result<(), TraceError>;
}
