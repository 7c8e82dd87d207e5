//! Minimal HTML entity escaping.

/// Escapes the five characters with meaning in HTML text and attribute
/// positions. Applied to every interpolated value (names, labels, the note)
/// before it reaches the document.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
