//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::CheckState;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a render operation
#[derive(Debug, Serialize)]
pub struct ReportOutput {
    /// Worst state across reported applications
    pub worst_state: CheckState,
    /// Whether the run passes the configured threshold
    pub passed: bool,
    /// Applications included in the report, sorted
    pub apps: Vec<String>,
    /// Results that could not be recorded
    pub rejected: usize,
    /// Rendered markdown report
    pub comment: String,
    /// File the report was written to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub written_to: Option<String>,
}

/// Result of a status operation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusOutput {
    /// Worst state across reported applications
    pub worst_state: CheckState,
    /// Lowest state that fails the run
    pub fail_on: CheckState,
    /// Whether the run passes
    pub passed: bool,
}

impl ReportOutput {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if let Some(path) = &self.written_to {
            println!("Wrote report for {} app(s) to {path}", self.apps.len());
            println!("Worst state: {}", colorize(self.worst_state));
        } else {
            println!("{}", self.comment);
        }
        if self.rejected > 0 {
            eprintln!("{} result(s) could not be recorded", self.rejected);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl StatusOutput {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Worst state: {}", colorize(self.worst_state));
                if self.passed {
                    println!("{}", "PASSED".green().bold());
                } else {
                    println!("{} (fails at {} or worse)", "FAILED".red().bold(), self.fail_on);
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

fn colorize(state: CheckState) -> colored::ColoredString {
    let name = state.bare_str();
    match state {
        CheckState::None => name.dimmed(),
        CheckState::Success => name.green(),
        CheckState::Running => name.cyan(),
        CheckState::Warning => name.yellow(),
        CheckState::Failure | CheckState::Error | CheckState::Panic => name.red(),
    }
}
