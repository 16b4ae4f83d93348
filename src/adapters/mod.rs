//! Adapter implementations for port traits
//!
//! - `emoji` - GitHub/GitLab state markers
//! - `log_tracer` - `log`-backed and no-op tracers
//! - `git` - Commit lookups via libgit2

pub mod emoji;
pub mod git;
pub mod log_tracer;

pub use emoji::{EmojiStyle, GithubEmoji, GitlabEmoji};
pub use log_tracer::{LogTracer, NoopTracer};
