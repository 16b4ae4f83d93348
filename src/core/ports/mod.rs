//! Port traits (interfaces) for external collaborators
//!
//! These traits define the boundaries between the aggregation core and
//! the things it decorates its output with or reports to.
//!
//! Implementations live in the `adapters` module.
//!
//! - [`StateMarker`] - State to visual marker mapping used when rendering
//! - [`Tracer`] - Span hooks around aggregate operations

mod marker;
mod tracer;

pub use marker::StateMarker;
#[cfg(test)]
pub use tracer::MockTracer;
pub use tracer::{
    SPAN_ADD_NEW_APP, SPAN_ADD_TO_APP_MESSAGE, SPAN_BUILD_COMMENT, TraceError, Tracer,
};
