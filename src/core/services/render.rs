//! Report rendering
//!
//! Turns a [`Snapshot`] into the markdown comment posted on a pull request.
//! Output depends only on the snapshot's contents, never on the order in
//! which results arrived: applications are emitted in ordinal name order and
//! each application's results in recording order.
//!
//! Layout:
//!
//! ```text
//! # <title>
//! <details>
//! <summary>
//!
//! ## <heading>: `<app>` <marker>
//! </summary>
//!
//! <details>
//! <summary><check summary> <State> <marker></summary>
//!
//! <check details>
//! </details>
//!
//! ---
//!
//! <details>
//! ...
//! </details></details>
//! ```

use std::fmt::Write as _;

use super::message::Snapshot;
use crate::core::models::{AppResults, CheckResult, CheckState};
use crate::core::ports::StateMarker;

/// Title used when none is configured
pub const DEFAULT_TITLE: &str = "Kubechecks Report";

/// Application section heading used when none is configured
pub const DEFAULT_HEADING: &str = "ArgoCD Application Checks";

/// Separator between two result blocks of the same application
pub const RESULT_SEPARATOR: &str = "\n\n---\n\n";

/// Presentation settings for [`render_comment`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Report title, rendered as a level-one heading
    pub title: String,
    /// Prefix of each application's section heading
    pub heading: String,
    /// Text appended verbatim after the last section
    pub footer: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            heading: DEFAULT_HEADING.to_string(),
            footer: None,
        }
    }
}

impl RenderOptions {
    /// Same options with `footer` appended to the report
    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

/// Render the full report for `snapshot`
///
/// Never fails. Suppressed applications are left out entirely; an application
/// without results still gets an (empty) section.
#[must_use]
pub fn render_comment(
    snapshot: &Snapshot,
    marker: &dyn StateMarker,
    options: &RenderOptions,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", options.title);

    for (app, results) in snapshot.visible() {
        render_app(&mut out, app, results, marker, &options.heading);
    }

    // One blank line before the footer, whatever the body ends with.
    if let Some(footer) = &options.footer {
        out.push_str(if out.ends_with('\n') { "\n" } else { "\n\n" });
        out.push_str(footer);
    }

    out
}

fn render_app(
    out: &mut String,
    app: &str,
    results: &AppResults,
    marker: &dyn StateMarker,
    heading: &str,
) {
    // An application with nothing worse than "no verdict" reads as passed.
    let app_state = match results.worst_state() {
        CheckState::None => CheckState::Success,
        state => state,
    };

    let blocks: Vec<String> = results.results().iter().map(|r| render_result(r, marker)).collect();

    out.push_str("<details>\n");
    out.push_str("<summary>\n\n");
    let _ = writeln!(out, "## {heading}: `{app}` {}", marker.marker(app_state));
    out.push_str("</summary>\n\n");
    out.push_str(&blocks.join(RESULT_SEPARATOR));
    out.push_str("</details>");
}

fn render_result(result: &CheckResult, marker: &dyn StateMarker) -> String {
    let summary = if result.state == CheckState::None {
        result.summary.clone()
    } else {
        format!("{} {} {}", result.summary, result.state, marker.marker(result.state))
    };

    format!("<details>\n<summary>{summary}</summary>\n\n{}\n</details>", result.details)
}
