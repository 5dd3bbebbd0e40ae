//! Rendering of the `DEFAULT_PROMPTS` class field.

use crate::escape::escape_template_literal;
use promptsync_prompt::{PromptEntry, PromptTable};

/// Prompt that is always emitted as a one-line double-quoted string.
pub const SINGLE_LINE_PROMPT: &str = "chat_fallback";

const OPEN_LINE: &str = "    static DEFAULT_PROMPTS = {";
const CLOSE_LINE: &str = "    };";
const ENTRY_INDENT: &str = "        ";

/// How a prompt body is written in the generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralStyle {
    /// `"..."` with newlines removed
    SingleLine,
    /// `` `...` `` keeping newlines
    Template,
    /// `"..."` for bodies without newlines
    Quoted,
}

impl LiteralStyle {
    pub fn for_entry(name: &str, body: &str) -> Self {
        if name == SINGLE_LINE_PROMPT {
            LiteralStyle::SingleLine
        } else if body.contains('\n') {
            LiteralStyle::Template
        } else {
            LiteralStyle::Quoted
        }
    }
}

fn render_entry(entry: &PromptEntry) -> String {
    let escaped = escape_template_literal(&entry.body);

    match LiteralStyle::for_entry(&entry.name, &entry.body) {
        LiteralStyle::SingleLine => format!(
            "{}{}: \"{}\"",
            ENTRY_INDENT,
            entry.name,
            escaped.replace('\n', "")
        ),
        LiteralStyle::Template => format!("{}{}: `{}`", ENTRY_INDENT, entry.name, escaped),
        LiteralStyle::Quoted => format!("{}{}: \"{}\"", ENTRY_INDENT, entry.name, escaped),
    }
}

/// Render the complete `static DEFAULT_PROMPTS = { ... };` block.
///
/// The output starts with the indented opening line and ends with the
/// indented `};`, with an empty line between the last entry and the close.
pub fn generate_default_prompts(table: &PromptTable) -> String {
    let entries: Vec<String> = table.entries().iter().map(render_entry).collect();

    tracing::debug!("Rendered {} prompt entries", entries.len());

    format!("{}\n{}\n\n{}", OPEN_LINE, entries.join(",\n"), CLOSE_LINE)
}
