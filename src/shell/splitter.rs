//! Bourne-shell word splitting.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// One scan step: optional leading whitespace, exactly one token alternative,
/// then an optional separator. Alternatives are listed in priority order.
static WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)\A\s*(?:(?P<word>[^\s\\'"]+)|'(?P<sq>[^']*)'|"(?P<dq>(?:[^"\\]|\\.)*)"|(?P<esc>\\.?)|(?P<garbage>\S))(?P<sep>\s|\z)?"#,
    )
    .expect("word pattern is valid")
});

/// Backslash sequences that collapse inside double quotes.
static DQ_ESCAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\\([$`"\\\n])"#).expect("escape pattern is valid"));

/// Errors that can occur when splitting a line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("unmatched quote: {line:?}")]
    UnmatchedQuote {
        /// The full input line that was rejected.
        line: String,
    },
}

/// Split a line into words the way a Bourne shell would.
///
/// Quoted and unquoted segments that touch are joined into one word, and an
/// explicitly quoted empty string yields an empty word.
///
/// ```
/// use shellwords::split;
///
/// let words = split(r#"here are "two words""#).unwrap();
/// assert_eq!(words, vec!["here", "are", "two words"]);
/// ```
pub fn split(line: &str) -> Result<Vec<String>, SplitError> {
    let mut words = Vec::new();
    let mut field = String::new();
    // Whether anything, even an empty quote, has contributed to `field`.
    let mut started = false;
    let mut pos = 0;

    while let Some(caps) = WORD_RE.captures(&line[pos..]) {
        // Every alternative consumes at least one character.
        pos += caps.get(0).map_or(0, |m| m.end());

        if caps.name("garbage").is_some() {
            return Err(SplitError::UnmatchedQuote {
                line: line.to_string(),
            });
        }

        if let Some(word) = caps.name("word") {
            field.push_str(word.as_str());
            started = true;
        } else if let Some(sq) = caps.name("sq") {
            field.push_str(sq.as_str());
            started = true;
        } else if let Some(dq) = caps.name("dq") {
            field.push_str(&DQ_ESCAPE_RE.replace_all(dq.as_str(), "$1"));
            started = true;
        } else if let Some(esc) = caps.name("esc") {
            match unescape_bare(esc.as_str()) {
                // A line continuation alone does not start a word
                "" => {}
                decoded => {
                    field.push_str(decoded);
                    started = true;
                }
            }
        }

        if started && caps.name("sep").is_some() {
            words.push(std::mem::take(&mut field));
            started = false;
        }
    }

    if !field.is_empty() {
        words.push(field);
    }

    Ok(words)
}

/// Decode an unquoted backslash escape.
fn unescape_bare(esc: &str) -> &str {
    match esc.strip_prefix('\\') {
        // Line continuation
        Some("\n") => "",
        // Lone trailing backslash stays literal
        Some("") | None => esc,
        Some(ch) => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &str) -> Vec<String> {
        split(line).unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert!(words("").is_empty());
        assert!(words("   \t\n ").is_empty());
    }

    #[test]
    fn test_simple_split() {
        assert_eq!(words("ls -la /tmp"), vec!["ls", "-la", "/tmp"]);
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(words("  a \t  b\n\nc  "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_double_quoted() {
        assert_eq!(
            words("here are \"two words\""),
            vec!["here", "are", "two words"]
        );
    }

    #[test]
    fn test_single_quoted_is_verbatim() {
        assert_eq!(words(r#"echo 'a\"b $x'"#), vec!["echo", r#"a\"b $x"#]);
    }

    #[test]
    fn test_adjacent_segments_merge() {
        assert_eq!(words("a'b'c"), vec!["abc"]);
        assert_eq!(words("a\"b\"c"), vec!["abc"]);
        assert_eq!(words(r"a\ b'c d'"), vec!["a bc d"]);
    }

    #[test]
    fn test_double_quote_escapes() {
        assert_eq!(words(r#""a\"b""#), vec![r#"a"b"#]);
        assert_eq!(words(r#""\$HOME \`x\` \\""#), vec![r"$HOME `x` \"]);
        // Other sequences are left alone
        assert_eq!(words(r#""\n\t""#), vec![r"\n\t"]);
        assert_eq!(words("\"a\\\nb\""), vec!["a\nb"]);
    }

    #[test]
    fn test_bare_escapes() {
        assert_eq!(words(r"echo hello\ world"), vec!["echo", "hello world"]);
        assert_eq!(words(r"\'quoted\'"), vec!["'quoted'"]);
        assert_eq!(words(r"a\\b"), vec![r"a\b"]);
    }

    #[test]
    fn test_line_continuation() {
        assert_eq!(words("a\\\nb"), vec!["ab"]);
        assert_eq!(words("a \\\n b"), vec!["a", "b"]);
        assert!(words("\\\n").is_empty());
    }

    #[test]
    fn test_trailing_backslash_is_literal() {
        assert_eq!(words("foo\\"), vec!["foo\\"]);
        assert_eq!(words("\\"), vec!["\\"]);
    }

    #[test]
    fn test_quoted_empty_string_is_a_word() {
        assert_eq!(words("''"), vec![""]);
        assert_eq!(words("\"\""), vec![""]);
        assert_eq!(words("a '' b"), vec!["a", "", "b"]);
        assert_eq!(words("a \"\""), vec!["a", ""]);
    }

    #[test]
    fn test_unmatched_single_quote() {
        let err = split("foo'bar").unwrap_err();
        assert_eq!(
            err,
            SplitError::UnmatchedQuote {
                line: "foo'bar".to_string()
            }
        );
        assert_eq!(err.to_string(), r#"unmatched quote: "foo'bar""#);
    }

    #[test]
    fn test_unmatched_double_quote() {
        assert!(split("echo \"hello").is_err());
        assert!(split(r#"echo "a\""#).is_err());
    }

    #[test]
    fn test_no_partial_result_on_error() {
        assert!(matches!(
            split("good words then ' bad"),
            Err(SplitError::UnmatchedQuote { .. })
        ));
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(words("héllo 'wörld ✓'"), vec!["héllo", "wörld ✓"]);
    }
}
