//! Text normalization applied to every incoming article before vectorization

use once_cell::sync::Lazy;
use regex::Regex;

/// Shortest `[...]` span on a single line
static BRACKETED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[.*?\]").expect("bracket pattern is valid"));

/// Word characters are letters, numbers (including `²`, `½`) and `_`.
/// Combining marks and joiners are not.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Normalize raw article text.
///
/// Lowercases, drops bracketed segments (brackets included), then replaces
/// every non-word character with a single space. Leading and trailing spaces
/// are kept; the vectorizer's tokenizer skips them.
pub fn clean_text(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    BRACKETED
        .replace_all(&lowered, "")
        .chars()
        .map(|c| if is_word_char(c) { c } else { ' ' })
        .collect()
}
