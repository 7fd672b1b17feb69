// src/sanitize.rs

/// Escape text for insertion into HTML (element content or attribute value).
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
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

/// First space-separated word, or the whole (trimmed) text if there is none.
pub fn first_word(s: &str) -> &str {
    s.split(' ').next().filter(|w| !w.is_empty()).unwrap_or(s)
}

/// Lower-case and trim for case-insensitive comparisons.
pub fn fold(s: &str) -> String {
    s.trim().to_lowercase()
}
