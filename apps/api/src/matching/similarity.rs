//! Similarity Scorer: cosine similarity between term-weight vectors, plus the
//! shared terms reported as evidence for a score.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::matching::tfidf::TermWeights;

/// Default number of matched terms reported per candidate.
pub const DEFAULT_MATCHED_TERMS: usize = 10;

/// Cosine similarity in `[0, 1]`. Zero when either vector has zero magnitude.
///
/// Terms missing from one side contribute nothing to the dot product, so only the
/// key intersection is walked.
pub fn cosine_similarity(a: &TermWeights, b: &TermWeights) -> f64 {
    let magnitude_a = a.magnitude();
    let magnitude_b = b.magnitude();
    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    let (smaller, larger) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = smaller
        .iter()
        .filter_map(|(term, weight)| larger.get(term).map(|other| weight * other))
        .sum();

    (dot / (magnitude_a * magnitude_b)).clamp(0.0, 1.0)
}

/// Percentage with two decimals: `round(cosine * 100, 2)`.
pub fn to_percentage(cosine: f64) -> f64 {
    (cosine * 100.0 * 100.0).round() / 100.0
}

/// Terms shared by both token sequences, most frequent first.
///
/// Frequency is the combined raw count across both sequences. Equal counts are
/// ordered lexicographically so results are reproducible.
pub fn matched_terms(tokens_a: &[String], tokens_b: &[String], top_n: usize) -> Vec<String> {
    let counts_a = occurrence_counts(tokens_a);
    let counts_b = occurrence_counts(tokens_b);

    let shared: HashSet<&str> = counts_a
        .keys()
        .filter(|term| counts_b.contains_key(*term))
        .copied()
        .collect();

    let mut ranked: Vec<(&str, usize)> = shared
        .into_iter()
        .map(|term| (term, counts_a[term] + counts_b[term]))
        .collect();

    ranked.sort_by(|(term_a, count_a), (term_b, count_b)| {
        match count_b.cmp(count_a) {
            Ordering::Equal => term_a.cmp(term_b),
            other => other,
        }
    });

    ranked
        .into_iter()
        .take(top_n)
        .map(|(term, _)| term.to_string())
        .collect()
}

fn occurrence_counts(tokens: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}
