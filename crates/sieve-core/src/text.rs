//! Text normalisation.
//!
//! Every piece of human-readable text that reaches an output line goes through
//! [`normalize`]: each maximal run of whitespace (spaces, tabs, newlines and the
//! other Unicode `White_Space` characters) becomes one ASCII space, and the
//! result is trimmed. The transform is idempotent.

/// Collapse whitespace runs to a single space and trim both ends.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// [`normalize`] followed by lowercasing, as used by the structured record.
#[must_use]
pub fn normalize_lower(text: &str) -> String {
    normalize(text).to_lowercase()
}

/// Replace an empty string with `placeholder`.
#[must_use]
pub fn or_placeholder(text: String, placeholder: &str) -> String {
    if text.is_empty() {
        placeholder.to_string()
    } else {
        text
    }
}
