//! Metadata Extractor: best-effort structured fields from free text.
//!
//! Nothing here fails. Missing information comes back as `None` or an empty list.
//! These are deliberately naive pattern heuristics; the thresholds (50-character
//! name cutoff, 500-character fallback excerpt) are part of the observable contract.

pub mod contact;
pub mod handlers;
pub mod requirements;
pub mod skills;
pub mod text;

use serde::{Deserialize, Serialize};

use crate::extraction::contact::{extract_email, extract_name};
use crate::extraction::requirements::extract_requirements;
use crate::extraction::skills::extract_skills;
use crate::extraction::text::clean_text;

/// Which extraction profile to run over a text blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionProfile {
    Resume,
    JobDescription,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeMetadata {
    pub name: Option<String>,
    pub email: Option<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDescriptionMetadata {
    pub requirements: String,
    pub skills: Vec<String>,
}

/// Output of a single extraction call, tagged by the profile that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "profile", rename_all = "snake_case")]
pub enum ExtractedMetadata {
    Resume(ResumeMetadata),
    JobDescription(JobDescriptionMetadata),
}

/// Name, email and skills from a raw resume.
///
/// The name is read from the cleaned text. Email and skills are read from the raw
/// text because cleaning strips `+`, `_`, `%` and `#`, which appear in addresses
/// and in labels such as "c++".
pub fn extract_resume_metadata(raw_text: &str) -> ResumeMetadata {
    let cleaned = clean_text(raw_text);
    ResumeMetadata {
        name: extract_name(&cleaned),
        email: extract_email(raw_text),
        skills: extract_skills(raw_text),
    }
}

pub fn extract_job_description_metadata(description: &str) -> JobDescriptionMetadata {
    JobDescriptionMetadata {
        requirements: extract_requirements(description),
        skills: extract_skills(description),
    }
}

pub fn extract(text: &str, profile: ExtractionProfile) -> ExtractedMetadata {
    match profile {
        ExtractionProfile::Resume => ExtractedMetadata::Resume(extract_resume_metadata(text)),
        ExtractionProfile::JobDescription => {
            ExtractedMetadata::JobDescription(extract_job_description_metadata(text))
        }
    }
}
