//! Frontmatter splitting for prompt markdown files.
//!
//! A prompt file may start with a metadata block:
//!
//! ```markdown
//! ---
//! name: chat
//! description: Follow-up chat prompt
//! ---
//! Body goes here
//! ```
//!
//! Only flat `key: value` lines are understood. Anything else inside the
//! block is ignored, and a file without a well-formed block is treated as
//! all body.

use crate::types::ParsedDocument;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

static FRONTMATTER_REGEX: OnceLock<Regex> = OnceLock::new();

fn frontmatter_regex() -> &'static Regex {
    FRONTMATTER_REGEX.get_or_init(|| {
        Regex::new(r"(?s)\A---\s*\n(.*?)\n---\s*\n(.*)\z").expect("Invalid frontmatter regex")
    })
}

/// Split a document into frontmatter metadata and a trimmed body.
///
/// Never fails: malformed or absent frontmatter yields empty metadata and
/// the whole document as body.
pub fn parse_frontmatter(content: &str) -> ParsedDocument {
    let Some(captures) = frontmatter_regex().captures(content) else {
        return ParsedDocument {
            metadata: HashMap::new(),
            body: content.trim().to_string(),
        };
    };

    let block = captures.get(1).map_or("", |m| m.as_str());
    let body = captures.get(2).map_or("", |m| m.as_str());

    ParsedDocument {
        metadata: parse_metadata(block),
        body: body.trim().to_string(),
    }
}

/// Parse `key: value` lines, splitting at the first colon.
fn parse_metadata(block: &str) -> HashMap<String, String> {
    block
        .split('\n')
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}
