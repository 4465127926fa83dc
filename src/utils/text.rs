//! Text normalisation shared by the ciphers.

/// Trims surrounding whitespace and, unless `case_sensitive`, lowercases.
pub fn normalize(text: &str, case_sensitive: bool) -> String {
    let trimmed = text.trim();
    if case_sensitive {
        trimmed.to_string()
    } else {
        trimmed.to_lowercase()
    }
}

/// Repeats (or truncates) `keyword` so that it is exactly `len` characters.
///
/// Returns an empty string when `keyword` is empty.
pub fn repeat_to_length(keyword: &str, len: usize) -> String {
    keyword.chars().cycle().take(len).collect()
}
