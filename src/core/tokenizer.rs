// src/core/tokenizer.rs
use std::collections::BTreeSet;

/// Splits `content` on ASCII whitespace (space, `\t`, `\n`, `\v`, `\f`, `\r`)
/// and keeps each word once. Presence, not frequency, is what the model counts.
/// Non-ASCII spaces such as U+00A0 stay part of the word.
pub fn unique_words(content: &str) -> BTreeSet<&str> {
    content
        .split(is_separator)
        .filter(|word| !word.is_empty())
        .collect()
}

fn is_separator(c: char) -> bool {
    // `is_ascii_whitespace` leaves out vertical tab
    c.is_ascii_whitespace() || c == '\x0b'
}
