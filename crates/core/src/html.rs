//! Minimal HTML escaping for notification email bodies.
//!
//! Submitted text is interpolated into an HTML template, so the five
//! characters with markup meaning are entity-encoded. Attribute values
//! additionally have newlines flattened to spaces.

/// Escapes `&`, `<`, `>`, `"` and `'` for safe interpolation into HTML
/// element content.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escapes a value for interpolation into an HTML attribute: entity
/// encoding plus newlines collapsed to single spaces.
pub fn escape_attr(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            '\n' | '\r' => escaped.push(' '),
            _ => escaped.push(ch),
        }
    }
    escaped
}
