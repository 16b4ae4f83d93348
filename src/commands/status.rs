//! Status command - gate a run on its worst state

use std::path::Path;
use std::process::ExitCode;

use checkreport::adapters::NoopTracer;
use checkreport::core::models::CheckState;
use checkreport::core::services::Message;
use checkreport::input::{self, ResultsFile};
use checkreport::output::StatusOutput;

use super::Context;

/// Print the worst state; exit non-zero when it reaches the threshold
pub fn status(
    ctx: &Context,
    results: &Path,
    fail_on: Option<CheckState>,
) -> anyhow::Result<ExitCode> {
    let file = ResultsFile::load(results)?;

    let mut config = ctx.config.clone();
    if let Some(state) = fail_on {
        config.fail_on = state;
    }

    let message = Message::with_marker("status", 0, 0, config.emoji.marker());
    input::feed(&message, &NoopTracer, &file);

    let worst_state = message.worst_state();
    let passed = !config.fails(worst_state);
    StatusOutput {
        worst_state,
        fail_on: config.fail_on,
        passed,
    }
    .render(ctx.output_mode);

    Ok(if passed { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
