//! Contact details: email address and candidate name heuristics.

use std::sync::LazyLock;

use regex::Regex;

/// Lines this long or longer are not accepted as a name.
const MAX_NAME_LEN: usize = 50;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email pattern")
});

/// First email address in `text`, if any.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL.find(text).map(|m| m.as_str().to_string())
}

/// Treats the first non-blank line as the candidate's name.
///
/// Accepted only when shorter than 50 characters and free of digits; resumes
/// conventionally lead with the name, and anything else is left absent.
pub fn extract_name(text: &str) -> Option<String> {
    let line = text.lines().map(str::trim).find(|line| !line.is_empty())?;

    if line.chars().count() < MAX_NAME_LEN && !line.chars().any(|c| c.is_ascii_digit()) {
        Some(line.to_string())
    } else {
        None
    }
}
