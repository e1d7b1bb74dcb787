use serde::{Deserialize, Serialize};
use std::fmt;

// Outcome of the latest submission attempt, shown under the form
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(tag = "kind", content = "message", rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    #[serde(rename = "none")]
    Idle,
    Success(String),
    Failure(String),
}

impl SubmissionStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionStatus::Success(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Success(msg) | SubmissionStatus::Failure(msg) => Some(msg),
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionStatus::Idle => write!(f, "none"),
            SubmissionStatus::Success(msg) => write!(f, "success: {}", msg),
            SubmissionStatus::Failure(msg) => write!(f, "failure: {}", msg),
        }
    }
}
