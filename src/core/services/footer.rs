//! Report footer
//!
//! A one-line status appended under the report. It is built separately from
//! the report body and handed to the renderer as text.

use chrono::{DateTime, TimeDelta, Utc};

/// Inputs for the footer line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    /// Host the run executed on, read once at process start
    pub hostname: String,
    /// Version/commit of this tool's build
    pub build_sha: String,
    /// Commit under review
    pub commit_sha: String,
    /// Label filter the run was scoped to, if any
    pub label_filter: Option<String>,
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// Include pod, duration and build details
    pub show_debug_info: bool,
}

impl Footer {
    /// Render the footer as of `now`
    #[must_use]
    pub fn render(&self, now: DateTime<Utc>) -> String {
        if !self.show_debug_info {
            return format!("<small>_Done. CommitSHA: {}_<small>\n", self.commit_sha);
        }

        let env = match self.label_filter.as_deref() {
            Some(filter) if !filter.is_empty() => format!(", Env: {filter}"),
            _ => String::new(),
        };
        let elapsed = format_elapsed(now - self.started_at);

        format!(
            "<small>_Done: Pod: {}, Dur: {elapsed}, SHA: {}{env}_<small>\n",
            self.hostname, self.build_sha
        )
    }
}

/// Compact duration: `250ms`, `12.345s`, `2m3.456s`
fn format_elapsed(delta: TimeDelta) -> String {
    let millis = delta.num_milliseconds().max(0);
    if millis < 1_000 {
        return format!("{millis}ms");
    }

    let minutes = millis / 60_000;
    let seconds = (millis % 60_000) / 1_000;
    let fraction = millis % 1_000;
    if minutes == 0 {
        format!("{seconds}.{fraction:03}s")
    } else {
        format!("{minutes}m{seconds}.{fraction:03}s")
    }
}
