//! Screening: one job description against a batch of raw resumes.
//!
//! Composes the extractor and the ranking pipeline the way uploads are processed:
//! the description is emphasised with its requirements excerpt, every resume is
//! cleaned before tokenization, and each ranked candidate carries its metadata.

pub mod handlers;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::extraction::text::clean_text;
use crate::extraction::{
    extract_job_description_metadata, extract_resume_metadata, ResumeMetadata,
};
use crate::matching::ranking::{
    rank_candidates, InvalidInputReason, RankingError, RankingOptions,
};
use crate::models::document::CandidateDocument;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenedCandidate {
    pub candidate_id: String,
    pub rank: u32,
    pub score: f64,
    pub matched_terms: Vec<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub skills: Vec<String>,
    /// Skills named in the job description that this resume also lists.
    pub matched_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub run_id: Uuid,
    pub screened_at: DateTime<Utc>,
    pub requirements: String,
    pub required_skills: Vec<String>,
    pub candidates: Vec<ScreenedCandidate>,
}

/// Ranks raw resumes against a job description and attaches extracted metadata.
pub fn screen(
    job_description: &str,
    resumes: &[CandidateDocument],
    options: &RankingOptions,
) -> Result<ScreeningReport, RankingError> {
    if job_description.trim().is_empty() {
        return Err(InvalidInputReason::EmptyQuery.into());
    }

    let job = extract_job_description_metadata(job_description);
    let query = format!("{job_description}\n\n{}", job.requirements);

    let cleaned: Vec<CandidateDocument> = resumes
        .iter()
        .map(|resume| CandidateDocument::new(resume.id.clone(), clean_text(&resume.text)))
        .collect();
    let mut metadata: HashMap<&str, ResumeMetadata> = resumes
        .iter()
        .map(|resume| (resume.id.as_str(), extract_resume_metadata(&resume.text)))
        .collect();

    let report = rank_candidates(&query, &cleaned, options)?;

    let candidates: Vec<ScreenedCandidate> = report
        .results
        .into_iter()
        .map(|result| {
            let resume = metadata
                .remove(result.candidate_id.as_str())
                .unwrap_or_default();
            let matched_skills = job
                .skills
                .iter()
                .filter(|skill| resume.skills.contains(skill))
                .cloned()
                .collect();
            ScreenedCandidate {
                candidate_id: result.candidate_id,
                rank: result.rank,
                score: result.score,
                matched_terms: result.matched_terms,
                name: resume.name,
                email: resume.email,
                skills: resume.skills,
                matched_skills,
            }
        })
        .collect();

    info!(
        "Screening run {} completed: {} resumes, {} required skills",
        report.run_id,
        candidates.len(),
        job.skills.len()
    );

    Ok(ScreeningReport {
        run_id: report.run_id,
        screened_at: report.ranked_at,
        requirements: job.requirements,
        required_skills: job.skills,
        candidates,
    })
}
