use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Why a submission attempt did not go through.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("name, phone and date are required")]
    Validation,

    #[error("relay rejected the submission with status {status}")]
    RelayRejection { status: u16, message: Option<String> },

    #[error("relay could not be reached: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Structural problems with a single field update.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DraftError {
    #[error("unknown form field '{0}'")]
    UnknownField(String),

    #[error("unknown service '{0}'")]
    UnknownService(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

impl ConfigError {
    pub fn invalid(key: &'static str, value: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            value: value.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum MailError {
    #[error("mail API is not configured")]
    NotConfigured,

    #[error("mail API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("mail API answered {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Failures of the email-forwarding relay endpoint.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Mail(#[from] MailError),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match self {
            RelayError::Invalid(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": message })),
            )
                .into_response(),
            RelayError::Mail(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "failed to send" })),
            )
                .into_response(),
        }
    }
}
