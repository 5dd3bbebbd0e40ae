//! Prompt loader for reading the prompt markdown files.

use crate::frontmatter::parse_frontmatter;
use crate::types::{LoadOutcome, MissingPrompt, PromptDefinition, PromptEntry};
use promptsync_core::{AppError, AppResult};
use std::path::Path;

/// The prompts synced into `DEFAULT_PROMPTS`, in output order.
pub const PROMPT_DEFINITIONS: &[PromptDefinition] = &[
    PromptDefinition {
        name: "optimize",
        filename: "optimize.md",
    },
    PromptDefinition {
        name: "chat",
        filename: "chat.md",
    },
    PromptDefinition {
        name: "chat_fallback",
        filename: "chat_fallback.md",
    },
    PromptDefinition {
        name: "refine",
        filename: "refine.md",
    },
    PromptDefinition {
        name: "refine_no_chat",
        filename: "refine_no_chat.md",
    },
];

/// Load every defined prompt from `prompts_dir`.
///
/// Missing files are recorded in [`LoadOutcome::missing`] and skipped;
/// reporting them to the operator is left to the caller.
/// A file that exists but cannot be read as UTF-8 text is an error.
///
/// # Example
/// ```no_run
/// use promptsync_prompt::{load_prompts, PROMPT_DEFINITIONS};
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let outcome = load_prompts(Path::new("docs/prompts"), PROMPT_DEFINITIONS)?;
/// println!("Loaded {} prompts", outcome.table.len());
/// # Ok(())
/// # }
/// ```
pub fn load_prompts(
    prompts_dir: &Path,
    definitions: &[PromptDefinition],
) -> AppResult<LoadOutcome> {
    let mut outcome = LoadOutcome::default();

    for def in definitions {
        let path = prompts_dir.join(def.filename);

        if !path.exists() {
            tracing::debug!("Prompt file not found, skipping: {:?}", path);
            outcome.missing.push(MissingPrompt {
                name: def.name.to_string(),
                path,
            });
            continue;
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| {
            AppError::Prompt(format!("Failed to read prompt file {:?}: {}", path, e))
        })?;

        let doc = parse_frontmatter(&contents);
        tracing::debug!(
            "Parsed {} with {} metadata keys",
            def.filename,
            doc.metadata.len()
        );

        let entry = PromptEntry {
            name: def.name.to_string(),
            filename: def.filename.to_string(),
            body: doc.body,
        };
        tracing::info!("Loaded prompt: {} ({} chars)", entry.name, entry.char_len());

        outcome.table.push(entry);
    }

    Ok(outcome)
}
