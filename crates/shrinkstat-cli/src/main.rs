//! shrinkstat - corpus reduction statistics
//!
//! Reads the per-run JSON statistic files written by the reduction pipeline
//! and prints, per area, how much the corpus shrank over successive passes.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{PruneArgs, ReportArgs};
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "shrinkstat")]
#[command(about = "Per-area corpus reduction statistics for fuzzing result files")]
#[command(version)]
#[command(long_about = "
shrinkstat aggregates the statistic files written by the corpus reduction
pipeline. For every area it reports the document counts, the average number
of reduction passes, the initial line count and the remaining line count
after each pass.

Run without arguments to read result1..result11 from the current directory.
Use --json for machine-readable output.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    report: ReportArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print per-area statistics (default)
    Report,

    /// Remove code lines from one area of a test case
    Prune(PruneArgs),

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("shrinkstat={log_level},shrinkstat_core={log_level}").into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }
            std::process::exit(error::exit_code(&e));
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        None | Some(Commands::Report) => commands::report::execute(&cli.report, cli.json),
        Some(Commands::Prune(args)) => {
            if cli.report.config.is_some() || !cli.report.areas.is_empty() {
                return Err(CliError::InvalidArgument(
                    "--config and --area apply to report only; prune takes the area as an argument"
                        .into(),
                )
                .into());
            }
            commands::prune::execute(args, cli.json)
        }
        Some(Commands::Completion { shell }) => {
            completion::generate_completion(*shell);
            Ok(())
        }
    }
}
