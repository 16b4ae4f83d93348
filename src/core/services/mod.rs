//! Business logic services
//!
//! Aggregation, rendering and footer construction. These services have no
//! I/O dependencies - they operate on data passed in and return results.
//!
//! - [`message`] - Concurrency-safe result aggregate
//! - [`render`] - Deterministic report rendering
//! - [`footer`] - Status line appended under the report
//! - [`traced`] - Span decorator around the aggregate

pub mod footer;
pub mod message;
pub mod render;
pub mod traced;

pub use footer::Footer;
pub use message::{Message, MessageError, Snapshot};
pub use render::{RenderOptions, render_comment};
pub use traced::Traced;
