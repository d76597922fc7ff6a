//! HTML escaping and character-budget truncation for list views.

/// Escapes HTML-significant characters.
///
/// Highlight fragments arrive pre-escaped by the engine and must never
/// pass through here a second time.
pub fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
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

/// Truncates to at most `budget` characters, appending `...` when
/// anything was cut. Counts characters, not bytes, so multi-byte text is
/// never split mid-scalar.
pub fn truncate_chars(input: &str, budget: usize) -> String {
    match input.char_indices().nth(budget) {
        Some((cut, _)) => format!("{}...", &input[..cut]),
        None => input.to_owned(),
    }
}
