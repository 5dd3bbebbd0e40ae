//! promptsync CLI
//!
//! Syncs the prompt markdown files into the `DEFAULT_PROMPTS` block of the
//! JavaScript client. Run without arguments from anywhere; paths resolve
//! against the project the binary is installed in.

mod commands;

use clap::Parser;
use promptsync_core::{logging, AppResult, SyncConfig};
use std::path::PathBuf;
use std::process::ExitCode;

/// Update DEFAULT_PROMPTS in the JavaScript client from the prompt markdown files
#[derive(Parser, Debug)]
#[command(name = "promptsync")]
#[command(about = "Update DEFAULT_PROMPTS from prompt markdown files", long_about = None)]
#[command(version)]
struct Cli {
    /// Project root (default: parent of the directory holding this binary)
    #[arg(long, env = "PROMPTSYNC_ROOT")]
    root: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output (also honours NO_COLOR)
    #[arg(long)]
    no_color: bool,

    /// Print the generated block instead of writing the target file
    #[arg(long)]
    dry_run: bool,

    /// Output the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = SyncConfig::load(cli.root)?.with_overrides(
        cli.log_level,
        cli.verbose,
        cli.no_color,
        cli.dry_run,
        cli.json,
    );

    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("promptsync starting");
    tracing::debug!("Root: {:?}", config.root);

    let _span = tracing::info_span!("command", name = "sync").entered();

    let report = commands::sync::execute(&config)?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    tracing::info!("Sync completed: {} prompts", report.updated.len());

    Ok(())
}
