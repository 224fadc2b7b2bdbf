use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InferError {
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Response parsing failed: {0}")]
    ParseFailed(#[from] serde_json::Error),

    #[error("AI gateway error: {}", .status.as_u16())]
    ErrorStatus { status: StatusCode, body: Box<str> },

    #[error("AI gateway returned no choices")]
    NoChoices,
}

impl InferError {
    /// The upstream HTTP status, when the gateway answered with a non-success one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            InferError::ErrorStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
