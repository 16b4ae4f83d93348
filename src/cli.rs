//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};

use crate::commands::{self, Context};
use checkreport::adapters::EmojiStyle;
use checkreport::config::ReportConfig;
use checkreport::core::models::CheckState;
use checkreport::output::OutputMode;

/// checkreport - Pull-request reports from CI check results
#[derive(Parser, Debug)]
#[command(
    name = "checkreport",
    version,
    about = "Pull-request reports from CI check results",
    long_about = "Collect per-application check results and render them into one\n\
                  deterministic markdown report.\n\n\
                  The worst state across all applications decides whether the run passes."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to .checkreport.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the report for a results file
    Render(RenderArgs),

    /// Print the worst state and fail if it reaches the threshold
    Status {
        /// Results file (JSON)
        results: PathBuf,

        /// Lowest state that fails the run
        #[arg(long)]
        fail_on: Option<CheckState>,
    },

    /// Show version
    Version,
}

/// Arguments for `render`
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Results file (JSON)
    pub results: PathBuf,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Commit under review (defaults to HEAD)
    #[arg(long)]
    pub commit_sha: Option<String>,

    /// Detailed footer with pod, duration and build
    #[arg(long)]
    pub debug: bool,

    /// Label filter the run was scoped to
    #[arg(long)]
    pub label_filter: Option<String>,

    /// Emoji set for state markers
    #[arg(long, value_enum)]
    pub emoji: Option<EmojiStyle>,

    /// Report title
    #[arg(long)]
    pub title: Option<String>,

    /// Check run identifier passed through to delivery
    #[arg(long, default_value_t = 0)]
    pub check_id: u64,

    /// Comment identifier passed through to delivery
    #[arg(long, default_value_t = 0)]
    pub note_id: u64,
}

/// Run the CLI
pub fn run(hostname: String, started_at: DateTime<Utc>) -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = match &cli.config {
        Some(path) => ReportConfig::load_from(path)?,
        None => ReportConfig::load(&std::env::current_dir()?)?,
    };

    let ctx = Context {
        hostname,
        started_at,
        config,
        output_mode,
    };

    match cli.command {
        Some(Command::Render(args)) => commands::render(&ctx, args),
        Some(Command::Status { results, fail_on }) => commands::status(&ctx, &results, fail_on),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": checkreport::VERSION
                    })
                );
            } else {
                println!("checkreport v{}", checkreport::VERSION);
            }
            Ok(ExitCode::SUCCESS)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": checkreport::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("checkreport v{}", checkreport::VERSION);
                println!("\nRun 'checkreport --help' for usage");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}
