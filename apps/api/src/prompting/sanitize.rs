//! Free-text input sanitization.
//!
//! A lossy character allow-list, not an escaping scheme: anything outside
//! alphanumerics, whitespace and basic punctuation (`. , ! ? ' " -`) is
//! dropped silently. The result is safe to interpolate into a prompt
//! template and to log, with no embedded control sequences.
//!
//! Order of operations: filter, trim, truncate to `max_chars` characters,
//! then trim again: truncation can land inside a whitespace run, and the
//! final trim keeps the function idempotent.

/// Default cap applied by [`sanitize`].
pub const DEFAULT_MAX_CHARS: usize = 2000;

/// Cleans user-supplied text with the default length cap.
pub fn sanitize(text: &str) -> String {
    sanitize_with_limit(text, DEFAULT_MAX_CHARS)
}

/// Cleans user-supplied text, truncating to at most `max_chars` characters
/// (counted after filtering and trimming). Never fails; empty input yields
/// an empty string.
pub fn sanitize_with_limit(text: &str, max_chars: usize) -> String {
    let filtered: String = text.chars().filter(|c| is_allowed(*c)).collect();
    let truncated: String = filtered.trim().chars().take(max_chars).collect();
    truncated.trim_end().to_string()
}

fn is_allowed(c: char) -> bool {
    c.is_alphanumeric()
        || c.is_whitespace()
        || matches!(c, '.' | ',' | '!' | '?' | '\'' | '"' | '-')
}
