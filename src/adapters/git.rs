//! Git lookups

use std::path::Path;

/// Full SHA of `HEAD` for the repository containing `dir`
#[must_use]
pub fn head_sha(dir: &Path) -> Option<String> {
    let repo = git2::Repository::discover(dir).ok()?;
    let head = repo.head().ok()?;
    head.peel_to_commit().ok().map(|commit| commit.id().to_string())
}
