//! String escaping for JavaScript template literals.

/// Escape text for embedding between back-ticks.
///
/// Backslashes are doubled first so the escapes added for back-ticks and
/// `${` are not themselves escaped again.
pub fn escape_template_literal(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}
