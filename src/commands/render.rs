//! Render command - build the report for a results file

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context as _;
use chrono::Utc;

use checkreport::adapters::{LogTracer, git};
use checkreport::core::services::{Footer, Message, Traced};
use checkreport::input::{self, ResultsFile};
use checkreport::output::ReportOutput;

use super::Context;
use crate::cli::RenderArgs;

/// Render the report for `args.results`
pub fn render(ctx: &Context, args: RenderArgs) -> anyhow::Result<ExitCode> {
    let file = ResultsFile::load(&args.results)?;

    let mut config = ctx.config.clone();
    if let Some(emoji) = args.emoji {
        config.emoji = emoji;
    }
    if let Some(title) = args.title {
        config.title = title;
    }
    if args.label_filter.is_some() {
        config.label_filter = args.label_filter;
    }
    config.show_debug_info |= args.debug;

    let message = Message::with_marker(
        config.title.clone(),
        args.check_id,
        args.note_id,
        config.emoji.marker(),
    );
    let feed = input::feed(&message, &LogTracer, &file);
    log::debug!("recorded {} result(s) for {} app(s)", feed.recorded, file.apps.len());

    let commit_sha = args
        .commit_sha
        .or_else(|| git::head_sha(Path::new(".")))
        .unwrap_or_else(|| "unknown".to_string());

    let footer = Footer {
        hostname: ctx.hostname.clone(),
        build_sha: checkreport::VERSION.to_string(),
        commit_sha,
        label_filter: config.label_filter.clone(),
        started_at: ctx.started_at,
        show_debug_info: config.show_debug_info,
    }
    .render(Utc::now());

    let options = config.render_options().with_footer(footer);
    let comment = Traced::new(&message, &LogTracer).build_comment(&options);

    let written_to = match &args.output {
        Some(path) => {
            fs::write(path, &comment)
                .with_context(|| format!("failed to write {}", path.display()))?;
            Some(path.display().to_string())
        },
        None => None,
    };

    let worst_state = message.worst_state();
    ReportOutput {
        worst_state,
        passed: !config.fails(worst_state),
        apps: message.app_names(),
        rejected: feed.errors.len(),
        comment,
        written_to,
    }
    .render(ctx.output_mode);

    Ok(ExitCode::SUCCESS)
}
