//! Tracer adapters

use std::time::Duration;

use crate::core::ports::{TraceError, Tracer};

/// Emits span boundaries as `trace`-level log records
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn start(&self, span: &'static str) -> Result<(), TraceError> {
        log::trace!("span start: {span}");
        Ok(())
    }

    fn end(&self, span: &'static str, elapsed: Duration) -> Result<(), TraceError> {
        log::trace!("span end: {span} ({elapsed:?})");
        Ok(())
    }
}

/// Discards spans
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    fn start(&self, _span: &'static str) -> Result<(), TraceError> {
        Ok(())
    }

    fn end(&self, _span: &'static str, _elapsed: Duration) -> Result<(), TraceError> {
        Ok(())
    }
}
