use serde::{Deserialize, Serialize};

/// A candidate document submitted to a ranking run.
///
/// The identifier is chosen by the caller and must be unique within the run.
/// The engine never rewrites `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDocument {
    pub id: String,
    pub text: String,
}

impl CandidateDocument {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}
