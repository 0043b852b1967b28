use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Normalizes uploaded resume text before it is stored and tokenized.
///
/// Whitespace runs collapse to one space, then anything that is not alphanumeric,
/// whitespace, `@`, `.` or `-` becomes a space, then the result is trimmed.
pub fn clean_text(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");

    collapsed
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() || matches!(c, '@' | '.' | '-') {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}
