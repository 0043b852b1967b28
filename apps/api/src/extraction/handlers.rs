use axum::Json;
use serde::Deserialize;

use crate::extraction::{extract, ExtractedMetadata, ExtractionProfile};

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
    pub profile: ExtractionProfile,
}

/// POST /api/v1/extract
/// Extraction never fails; absent fields come back as null or empty lists.
pub async fn handle_extract(Json(req): Json<ExtractRequest>) -> Json<ExtractedMetadata> {
    Json(extract(&req.text, req.profile))
}
