//! Prompt sources for promptsync.
//!
//! This crate turns the markdown prompt templates into plain bodies:
//! - Frontmatter splitting (`---` delimited `key: value` block)
//! - The fixed prompt definition table
//! - Loading of the prompt table from a prompts directory

pub mod frontmatter;
pub mod loader;
pub mod types;

// Re-export main types
pub use frontmatter::parse_frontmatter;
pub use loader::{load_prompts, PROMPT_DEFINITIONS};
pub use types::{LoadOutcome, MissingPrompt, ParsedDocument, PromptDefinition, PromptEntry, PromptTable};
