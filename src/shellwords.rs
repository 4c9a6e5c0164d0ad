//! Quote-aware splitting of shell command lines.

use regex::Regex;
use std::sync::LazyLock;

// Backslash-newline continuations collapse to a single space before splitting.
static CONTINUATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\\\s*\n\s*").unwrap());

/// Split a command line into words.
///
/// Honors single and double quotes (a quoted span is one word, quotes
/// stripped), backslash-escaped quote characters, and backslash-newline
/// line continuations. This is not a full shell lexer: variable
/// expansion, subshells and redirections are passed through verbatim.
pub fn split(cmdline: &str) -> Vec<String> {
    let cmdline = CONTINUATION_REGEX.replace_all(cmdline, " ");

    let mut words = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut prev: Option<char> = None;

    for ch in cmdline.chars() {
        match ch {
            '"' | '\'' if prev != Some('\\') => match quote {
                None => quote = Some(ch),
                Some(q) if q == ch => quote = None,
                Some(_) => current.push(ch),
            },
            c if c.is_whitespace() && quote.is_none() => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
        prev = Some(ch);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}
