//! Sync command handler.
//!
//! Loads the prompt markdown files, renders `DEFAULT_PROMPTS` and splices it
//! into the target file.

use promptsync_codegen::{generate_default_prompts, update_file};
use promptsync_core::{AppError, AppResult, SyncConfig};
use promptsync_prompt::{load_prompts, LoadOutcome, PROMPT_DEFINITIONS};
use serde::Serialize;
use std::path::PathBuf;

/// Summary of a completed sync run.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub target: PathBuf,
    pub updated: Vec<String>,
    pub skipped: Vec<String>,
    pub written: bool,
    pub changed: bool,
}

/// Progress printer; silent when the summary goes out as JSON.
struct Console {
    quiet: bool,
}

impl Console {
    fn line(&self, text: impl AsRef<str>) {
        if !self.quiet {
            println!("{}", text.as_ref());
        }
    }
}

/// Run the full sync described by `config`.
pub fn execute(config: &SyncConfig) -> AppResult<SyncReport> {
    tracing::info!("Executing sync");
    tracing::debug!("Sync options: {:?}", config);

    config.validate()?;

    let prompts_dir = config.prompts_path();
    let target = config.target_path();
    let console = Console { quiet: config.json };

    console.line(format!("Loading prompts from: {}", prompts_dir.display()));
    console.line(format!("Updating: {}", target.display()));
    console.line("");

    let outcome = load_prompts(&prompts_dir, PROMPT_DEFINITIONS)?;
    report_load(&console, &outcome);

    if outcome.table.is_empty() {
        return Err(AppError::Prompt("No prompts loaded".to_string()));
    }

    let block = generate_default_prompts(&outcome.table);

    console.line("");
    let splice = update_file(&target, &block, config.dry_run)?;

    let target_name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| target.display().to_string());
    let updated: Vec<String> = outcome.table.names().iter().map(|n| n.to_string()).collect();

    if config.dry_run {
        console.line(&block);
        console.line("");
        console.line(format!("Dry run: {} not written", target_name));
    } else {
        console.line(format!(
            "Successfully updated DEFAULT_PROMPTS in {}",
            target_name
        ));
        console.line(format!(
            "Updated {} prompts: {}",
            updated.len(),
            updated.join(", ")
        ));
    }

    Ok(SyncReport {
        target,
        updated,
        skipped: outcome
            .missing_names()
            .into_iter()
            .map(String::from)
            .collect(),
        written: splice.written,
        changed: splice.changed,
    })
}

/// Print one line per definition, in definition order.
fn report_load(console: &Console, outcome: &LoadOutcome) {
    for def in PROMPT_DEFINITIONS {
        if let Some(entry) = outcome.table.entries().iter().find(|e| e.name == def.name) {
            console.line(format!("Loaded: {} ({} chars)", entry.filename, entry.char_len()));
        } else if let Some(missing) = outcome.missing.iter().find(|m| m.name == def.name) {
            console.line(format!(
                "Warning: {} not found, skipping",
                missing.path.display()
            ));
        }
    }
}
