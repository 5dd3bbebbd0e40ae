//! JavaScript generation for promptsync.
//!
//! Renders the prompt table as a `static DEFAULT_PROMPTS = { ... };` class
//! field and splices it into the target file in place of the previous one.

pub mod escape;
pub mod generator;
pub mod splice;

pub use escape::escape_template_literal;
pub use generator::{generate_default_prompts, LiteralStyle, SINGLE_LINE_PROMPT};
pub use splice::{splice_block, update_file, SpliceOutcome};
