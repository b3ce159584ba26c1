//! Case conversion for component names
//!
//! Both helpers reproduce Laravel's `Str::studly` and `Str::kebab` so class
//! and view names match what the application itself would derive from the
//! same component name.

/// Convert `value` to StudlyCase (`profile-card` → `ProfileCard`).
///
/// `-` and `_` act as word separators alongside spaces; the first character
/// of each word is upper-cased and the rest is left untouched.
pub fn studly(value: &str) -> String {
    value
        .split(['-', '_', ' '])
        .map(upper_first)
        .collect()
}

/// Convert `value` to kebab-case (`ProfileCard` → `profile-card`).
///
/// Values made only of ASCII lowercase letters are returned as-is. Otherwise
/// whitespace-separated words are capitalised and joined, a `-` is inserted
/// before every ASCII uppercase letter that follows another character, and
/// the result is lower-cased. Existing separators are kept, so `profile-card`
/// stays `profile-card` and `user2` stays `user2`.
pub fn kebab(value: &str) -> String {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_lowercase()) {
        return value.to_string();
    }

    let joined = ucwords(value);
    let mut out = String::with_capacity(joined.len() + 4);
    let mut chars = joined.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if chars.peek().is_some_and(|next| next.is_ascii_uppercase()) {
            out.push('-');
        }
    }
    out.to_lowercase()
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// Word breaks recognised by PHP's `ucwords`.
const WORD_BREAKS: [char; 6] = [' ', '\t', '\r', '\n', '\x0c', '\x0b'];

// Capitalise the first ASCII letter after each ASCII word break, then drop all
// whitespace. Unicode spaces are removed but never start a new word.
fn ucwords(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for c in value.chars() {
        if WORD_BREAKS.contains(&c) {
            at_word_start = true;
            continue;
        }
        if c.is_whitespace() {
            at_word_start = false;
            continue;
        }
        if at_word_start {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = false;
    }
    out
}
