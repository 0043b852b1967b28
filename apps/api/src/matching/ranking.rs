//! Ranking Pipeline: scores every candidate against one query document and
//! returns a stably ordered, ranked result list.
//!
//! A run moves through `Idle → TokenizingCorpus → Weighting → Scoring → Ranked`.
//! Any validation failure aborts the run before tokenization; partial results are
//! never returned.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::matching::similarity::{
    cosine_similarity, matched_terms, to_percentage, DEFAULT_MATCHED_TERMS,
};
use crate::matching::tfidf::Corpus;
use crate::matching::tokenizer::tokenize;
use crate::models::document::CandidateDocument;

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputReason),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputReason {
    #[error("query text is empty")]
    EmptyQuery,

    #[error("at least one candidate is required")]
    NoCandidates,

    #[error("candidate '{id}' has empty text")]
    EmptyCandidate { id: String },

    #[error("candidate id '{id}' is submitted more than once")]
    DuplicateCandidate { id: String },
}

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingStage {
    Idle,
    TokenizingCorpus,
    Weighting,
    Scoring,
    Ranked,
}

impl fmt::Display for RankingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RankingStage::Idle => "idle",
            RankingStage::TokenizingCorpus => "tokenizing_corpus",
            RankingStage::Weighting => "weighting",
            RankingStage::Scoring => "scoring",
            RankingStage::Ranked => "ranked",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingOptions {
    /// Upper bound on matched terms reported per candidate.
    pub matched_terms_limit: usize,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            matched_terms_limit: DEFAULT_MATCHED_TERMS,
        }
    }
}

/// One candidate's position in a ranking run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub candidate_id: String,
    pub score: f64, // 0.00 – 100.00
    pub matched_terms: Vec<String>,
    pub rank: u32, // 1-based
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    pub run_id: Uuid,
    pub ranked_at: DateTime<Utc>,
    pub candidate_count: usize,
    pub query_token_count: usize,
    pub results: Vec<RankedCandidate>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Ranks `candidates` by TF-IDF cosine similarity to `query`.
///
/// The corpus is `{query} ∪ candidates`, rebuilt on every call. Results are sorted
/// by score descending; equal scores keep submission order.
pub fn rank_candidates(
    query: &str,
    candidates: &[CandidateDocument],
    options: &RankingOptions,
) -> Result<RankingReport, RankingError> {
    let run_id = Uuid::new_v4();
    log_stage(run_id, RankingStage::Idle);

    if let Err(reason) = validate(query, candidates) {
        warn!("Ranking run {run_id} rejected: {reason}");
        return Err(reason.into());
    }

    log_stage(run_id, RankingStage::TokenizingCorpus);
    let mut token_lists = Vec::with_capacity(candidates.len() + 1);
    token_lists.push(tokenize(query));
    token_lists.extend(candidates.iter().map(|c| tokenize(&c.text)));
    let corpus = Corpus::new(&token_lists);
    let query_tokens = &token_lists[0];
    let candidate_tokens = &token_lists[1..];

    log_stage(run_id, RankingStage::Weighting);
    let query_weights = corpus.weigh(query_tokens);

    log_stage(run_id, RankingStage::Scoring);
    let mut scored: Vec<(String, f64, Vec<String>)> = candidates
        .iter()
        .zip(candidate_tokens)
        .map(|(candidate, tokens)| {
            let weights = corpus.weigh(tokens);
            let cosine = cosine_similarity(&query_weights, &weights);
            let terms = matched_terms(query_tokens, tokens, options.matched_terms_limit);
            (candidate.id.clone(), to_percentage(cosine), terms)
        })
        .collect();

    // Stable sort: ties keep submission order.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    let results: Vec<RankedCandidate> = scored
        .into_iter()
        .zip(1u32..)
        .map(|((candidate_id, score, terms), rank)| RankedCandidate {
            candidate_id,
            score,
            matched_terms: terms,
            rank,
        })
        .collect();

    log_stage(run_id, RankingStage::Ranked);
    info!(
        "Ranking run {run_id} completed: {} candidates, top score {:.2}",
        results.len(),
        results.first().map(|r| r.score).unwrap_or(0.0)
    );

    Ok(RankingReport {
        run_id,
        ranked_at: Utc::now(),
        candidate_count: results.len(),
        query_token_count: query_tokens.len(),
        results,
    })
}

fn validate(query: &str, candidates: &[CandidateDocument]) -> Result<(), InvalidInputReason> {
    if query.trim().is_empty() {
        return Err(InvalidInputReason::EmptyQuery);
    }
    if candidates.is_empty() {
        return Err(InvalidInputReason::NoCandidates);
    }

    let mut seen = HashSet::with_capacity(candidates.len());
    for candidate in candidates {
        if candidate.text.trim().is_empty() {
            return Err(InvalidInputReason::EmptyCandidate {
                id: candidate.id.clone(),
            });
        }
        if !seen.insert(candidate.id.as_str()) {
            return Err(InvalidInputReason::DuplicateCandidate {
                id: candidate.id.clone(),
            });
        }
    }
    Ok(())
}

fn log_stage(run_id: Uuid, stage: RankingStage) {
    debug!("Ranking run {run_id}: stage={stage}");
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
