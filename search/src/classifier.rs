//! Character predicates used by the scoring model.

/// Returns true for characters that separate words in a file name.
pub fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '_' | '.' | '-')
}

/// Returns true when `cur` starts a new word in camelCase text.
pub fn is_camel_boundary(prev: char, cur: char) -> bool {
    prev.is_lowercase() && cur.is_uppercase()
}
