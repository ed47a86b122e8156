//! HTML escaping for text inserted into markup

/// Escape text for safe insertion into HTML element content or a quoted
/// attribute value.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their entity forms; everything
/// else passes through unchanged.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}
