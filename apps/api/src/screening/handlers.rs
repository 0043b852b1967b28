use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::matching::handlers::{run_blocking, run_options};
use crate::models::document::CandidateDocument;
use crate::screening::{screen, ScreeningReport};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScreeningRequest {
    pub job_description: String,
    pub resumes: Vec<CandidateDocument>,
    #[serde(default)]
    pub matched_terms_limit: Option<usize>,
}

/// POST /api/v1/screenings
pub async fn handle_screen(
    State(state): State<AppState>,
    Json(req): Json<ScreeningRequest>,
) -> Result<Json<ScreeningReport>, AppError> {
    let options = run_options(&state, req.resumes.len(), req.matched_terms_limit)?;
    let report = run_blocking(move || screen(&req.job_description, &req.resumes, &options)).await??;
    Ok(Json(report))
}
