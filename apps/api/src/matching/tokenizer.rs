//! Tokenizer: turns raw document text into the index terms used for weighting.

use std::sync::LazyLock;

use regex::Regex;

/// Tokens of this length or shorter are dropped.
const MIN_TOKEN_LEN: usize = 2;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").expect("valid non-alphanumeric pattern"));

/// Lower-cases `text`, turns every character outside `[a-z0-9]` and whitespace
/// into a token boundary, and keeps tokens longer than two characters.
///
/// Order and duplicates are preserved: the sequence feeds term frequencies.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let normalized = NON_ALPHANUMERIC.replace_all(&lowered, " ");

    normalized
        .split_whitespace()
        .filter(|token| token.len() > MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}
