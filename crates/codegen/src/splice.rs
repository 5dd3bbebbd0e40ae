//! Replacement of the `DEFAULT_PROMPTS` block inside the target file.
//!
//! The block is found textually: from the `static DEFAULT_PROMPTS = {`
//! line to the nearest following `    };`. Braces inside prompt bodies are
//! never inspected.

use promptsync_core::{AppError, AppResult};
use regex::Regex;
use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;
use tempfile::NamedTempFile;

/// Indent of the opening line of the class field.
const FIELD_INDENT: &str = "    ";

static BLOCK_REGEX: OnceLock<Regex> = OnceLock::new();

fn block_regex() -> &'static Regex {
    BLOCK_REGEX.get_or_init(|| {
        Regex::new(r"(    )?static DEFAULT_PROMPTS = \{[\s\S]*?    \};")
            .expect("Invalid DEFAULT_PROMPTS block regex")
    })
}

/// What [`update_file`] did to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpliceOutcome {
    /// The target file was rewritten
    pub written: bool,

    /// The new content differs from the old
    pub changed: bool,
}

/// Replace the first `DEFAULT_PROMPTS` block in `content` with `block`.
///
/// Returns `None` when no block is present. `block` is inserted verbatim,
/// minus its leading field indent when the marker in `content` has none.
/// Text outside the matched region is left untouched.
pub fn splice_block(content: &str, block: &str) -> Option<String> {
    let regex = block_regex();
    let captures = regex.captures(content)?;
    let found = captures.get(0)?;

    tracing::debug!(
        "DEFAULT_PROMPTS block spans bytes {}..{}",
        found.start(),
        found.end()
    );

    if regex.find_at(content, found.end()).is_some() {
        tracing::warn!("More than one DEFAULT_PROMPTS block found; only the first is replaced");
    }

    let replacement = if captures.get(1).is_some() {
        block
    } else {
        block.strip_prefix(FIELD_INDENT).unwrap_or(block)
    };

    let mut updated = String::with_capacity(content.len() + block.len());
    updated.push_str(&content[..found.start()]);
    updated.push_str(replacement);
    updated.push_str(&content[found.end()..]);
    Some(updated)
}

/// Splice `block` into the file at `path` and write it back.
///
/// The new content goes to a temporary file next to the target, which is
/// then renamed over it, so the target is either fully replaced or left as
/// it was. With `dry_run` the block is still located but nothing is written.
pub fn update_file(path: &Path, block: &str, dry_run: bool) -> AppResult<SpliceOutcome> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| AppError::Splice(format!("Failed to read {}: {}", path.display(), e)))?;

    let Some(updated) = splice_block(&content, block) else {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        return Err(AppError::Splice(format!(
            "Could not find DEFAULT_PROMPTS block in {}",
            name
        )));
    };

    let changed = updated != content;

    if dry_run {
        tracing::info!("Dry run, leaving {:?} untouched", path);
        return Ok(SpliceOutcome {
            written: false,
            changed,
        });
    }

    replace_contents(path, &updated)?;

    tracing::info!("Wrote {:?}", path);

    Ok(SpliceOutcome {
        written: true,
        changed,
    })
}

/// Write `contents` to a sibling temp file and rename it over `path`.
fn replace_contents(path: &Path, contents: &str) -> AppResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let permissions = std::fs::metadata(path)?.permissions();

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(contents.as_bytes())?;
    temp.as_file().sync_all()?;
    temp.as_file().set_permissions(permissions)?;

    temp.persist(path).map_err(|e| {
        AppError::Splice(format!("Failed to write {}: {}", path.display(), e.error))
    })?;

    Ok(())
}
