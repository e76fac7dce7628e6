//! Shell-safe escaping and command line joining.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Display;

/// Characters outside the safe set get a backslash.
static UNSAFE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\-.,:+/@\n]").expect("unsafe pattern is valid"));

/// Escape a value so a Bourne shell reads it back as exactly one word.
///
/// Any `Display` value is accepted and escaped by its text. Newlines are
/// emitted inside single quotes, since some shells drop a backslash-escaped
/// newline.
///
/// ```
/// use shellwords::escape;
///
/// assert_eq!(escape(""), "''");
/// assert_eq!(escape("It's here"), r"It\'s\ here");
/// assert_eq!(escape(42), "42");
/// ```
pub fn escape(value: impl Display) -> String {
    let text = value.to_string();
    if text.is_empty() {
        return "''".to_string();
    }
    UNSAFE_RE
        .replace_all(&text, r"\$0")
        .replace('\n', "'\n'")
}

/// Build a command line from a list of arguments.
pub fn join<I>(words: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    words.into_iter().map(escape).collect::<Vec<_>>().join(" ")
}
