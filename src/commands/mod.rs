//! Command implementations

mod render;
mod status;

use chrono::{DateTime, Utc};
use checkreport::config::ReportConfig;
use checkreport::output::OutputMode;

pub use render::render;
pub use status::status;

/// Process-wide inputs shared by every command
#[derive(Debug)]
pub struct Context {
    /// Host name read at startup
    pub hostname: String,
    /// When the process started
    pub started_at: DateTime<Utc>,
    /// Loaded configuration
    pub config: ReportConfig,
    /// Human or JSON output
    pub output_mode: OutputMode,
}
