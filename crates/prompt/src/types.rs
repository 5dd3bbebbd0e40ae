//! Prompt types for promptsync.
//!
//! This module defines the values passed between the loader and the
//! code generator.

use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Maps a logical prompt name to its markdown file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptDefinition {
    /// Logical name used as the object key in the generated block
    pub name: &'static str,

    /// File name inside the prompts directory
    pub filename: &'static str,
}

/// A document split into its frontmatter and body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    /// Flat `key: value` pairs from the frontmatter block
    pub metadata: HashMap<String, String>,

    /// Content after the frontmatter, trimmed
    pub body: String,
}

/// One loaded prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptEntry {
    /// Logical name
    pub name: String,

    /// Source file name
    pub filename: String,

    /// Prompt body without frontmatter
    pub body: String,
}

impl PromptEntry {
    /// Body length in characters.
    pub fn char_len(&self) -> usize {
        self.body.chars().count()
    }
}

/// Loaded prompts in definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PromptTable {
    entries: Vec<PromptEntry>,
}

impl PromptTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Callers insert in definition order.
    pub fn push(&mut self, entry: PromptEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[PromptEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.body.as_str())
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<PromptEntry> for PromptTable {
    fn from_iter<I: IntoIterator<Item = PromptEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A definition whose file was absent from the prompts directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingPrompt {
    pub name: String,
    pub path: PathBuf,
}

/// Result of loading the prompts directory.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    /// Prompts that were found and parsed
    pub table: PromptTable,

    /// Definitions that were skipped
    pub missing: Vec<MissingPrompt>,
}

impl LoadOutcome {
    /// Logical names of the skipped definitions.
    pub fn missing_names(&self) -> Vec<&str> {
        self.missing.iter().map(|m| m.name.as_str()).collect()
    }
}
