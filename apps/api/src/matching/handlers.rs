use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::matching::ranking::{rank_candidates, RankingOptions, RankingReport};
use crate::models::document::CandidateDocument;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RankingRequest {
    pub query: String,
    pub candidates: Vec<CandidateDocument>,
    #[serde(default)]
    pub matched_terms_limit: Option<usize>,
}

/// POST /api/v1/rankings
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(req): Json<RankingRequest>,
) -> Result<Json<RankingReport>, AppError> {
    let options = run_options(&state, req.candidates.len(), req.matched_terms_limit)?;
    let report =
        run_blocking(move || rank_candidates(&req.query, &req.candidates, &options)).await??;
    Ok(Json(report))
}

/// Checks request-level bounds and resolves the ranking options for one run.
/// An empty candidate list is left to the engine, which reports it as invalid input.
pub fn run_options(
    state: &AppState,
    candidate_count: usize,
    matched_terms_limit: Option<usize>,
) -> Result<RankingOptions, AppError> {
    if candidate_count > state.config.max_candidates {
        return Err(AppError::Validation(format!(
            "{candidate_count} candidates submitted; at most {} are accepted per run",
            state.config.max_candidates
        )));
    }
    if matched_terms_limit == Some(0) {
        return Err(AppError::Validation(
            "matched_terms_limit must be at least 1".to_string(),
        ));
    }
    Ok(state.ranking_options(matched_terms_limit))
}

/// Runs CPU-bound engine work on the blocking pool so the reactor stays responsive.
pub async fn run_blocking<T, F>(job: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Ranking worker failed: {e}")))
}
