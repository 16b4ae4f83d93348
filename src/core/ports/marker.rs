//! State marker port
//!
//! Maps a check state to the short visual token (usually an emoji shortcode)
//! shown next to it in a report. Each VCS flavours these differently.

use crate::core::models::CheckState;

/// Turns a state into the marker shown beside it in a report
///
/// Implementations must be total and side-effect free; the renderer may call
/// them any number of times.
pub trait StateMarker: Send + Sync {
    /// Marker text for `state`
    fn marker(&self, state: CheckState) -> String;
}

impl<F> StateMarker for F
where
    F: Fn(CheckState) -> String + Send + Sync,
{
    fn marker(&self, state: CheckState) -> String {
        self(state)
    }
}
