//! Text helpers.

/// Single-line preview of `s` for log output.
///
/// Newlines are folded into spaces and the result is cut to `max_chars`
/// characters (not bytes), with `...` appended when something was cut.
pub fn preview(s: &str, max_chars: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    let flat = flat.trim();
    if flat.chars().count() <= max_chars {
        return flat.to_string();
    }
    let cut: String = flat.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", cut.trim_end())
}

/// Whether a value should be treated as "not provided".
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
