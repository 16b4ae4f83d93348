//! Process host information
//!
//! Read once at startup and passed down explicitly.

/// Name of the machine (or pod) this process runs on, as the OS reports it
///
/// Empty when the OS lookup fails.
#[must_use]
pub fn hostname() -> String {
    match ::hostname::get() {
        Ok(name) => name.to_string_lossy().into_owned(),
        Err(e) => {
            log::warn!("failed to read hostname: {e}");
            String::new()
        },
    }
}
