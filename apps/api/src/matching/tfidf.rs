//! Corpus Weighting Model: corpus-relative TF-IDF vectors.
//!
//! A `Corpus` is built once per ranking run from the token lists of the query and
//! every candidate. Weights are only meaningful inside that run; nothing here is
//! cached across corpora.

use std::collections::{HashMap, HashSet};

/// Sparse term-weight vector for one document within one corpus.
/// Only tokens present in the document have an entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermWeights(HashMap<String, f64>);

impl TermWeights {
    pub fn get(&self, term: &str) -> Option<f64> {
        self.0.get(term).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.0.iter().map(|(term, &weight)| (term.as_str(), weight))
    }

    /// Euclidean norm of the vector.
    pub fn magnitude(&self) -> f64 {
        self.0.values().map(|w| w * w).sum::<f64>().sqrt()
    }
}

impl FromIterator<(String, f64)> for TermWeights {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The token lists of every document in one ranking run, query included.
#[derive(Debug, Clone)]
pub struct Corpus<'a> {
    documents: &'a [Vec<String>],
    /// Number of documents containing each term at least once.
    document_frequencies: HashMap<&'a str, usize>,
}

impl<'a> Corpus<'a> {
    pub fn new(documents: &'a [Vec<String>]) -> Self {
        let mut document_frequencies: HashMap<&'a str, usize> = HashMap::new();
        for tokens in documents {
            let distinct: HashSet<&'a str> = tokens.iter().map(String::as_str).collect();
            for term in distinct {
                *document_frequencies.entry(term).or_insert(0) += 1;
            }
        }

        Self {
            documents,
            document_frequencies,
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Token list of the document at `index`, in corpus order.
    #[cfg(test)]
    pub fn document(&self, index: usize) -> Option<&'a [String]> {
        self.documents.get(index).map(Vec::as_slice)
    }

    pub fn document_frequency(&self, term: &str) -> usize {
        self.document_frequencies.get(term).copied().unwrap_or(0)
    }

    /// `ln(N / (df + 1))`. Negative once a term is in more than `N / e` documents,
    /// which lets near-ubiquitous terms pull similarity down.
    pub fn inverse_document_frequency(&self, term: &str) -> f64 {
        inverse_document_frequency(self.len(), self.document_frequency(term))
    }

    /// TF-IDF vector for `tokens` against this corpus.
    ///
    /// idf is only evaluated for terms the document actually contains.
    pub fn weigh(&self, tokens: &[String]) -> TermWeights {
        term_frequencies(tokens)
            .into_iter()
            .map(|(term, tf)| {
                let idf = self.inverse_document_frequency(term);
                (term.to_string(), tf * idf)
            })
            .collect()
    }
}

/// Fractional occurrence rate of each distinct token: `count / len`.
pub fn term_frequencies(tokens: &[String]) -> HashMap<&str, f64> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    let total = tokens.len() as f64;
    counts
        .into_iter()
        .map(|(term, count)| (term, count as f64 / total))
        .collect()
}

/// Add-one smoothed idf. Finite for any corpus size >= 1.
pub fn inverse_document_frequency(corpus_size: usize, document_frequency: usize) -> f64 {
    (corpus_size as f64 / (document_frequency as f64 + 1.0)).ln()
}
