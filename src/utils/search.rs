//! Case-insensitive substring matching shared by the search boxes.

#[inline]
fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// True when `needle` occurs anywhere in `haystack`, ignoring case.
pub fn contains(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(&normalize(needle))
}
