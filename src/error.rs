use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Failures on the `/translate` request path.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("No text provided")]
    MissingText,

    /// Query string axum could not decode at all
    #[error("Invalid query string")]
    InvalidQuery(String),

    /// Upstream answered with a status >= 400
    #[error("Upstream translation error")]
    UpstreamStatus(u16),

    #[error("Unexpected upstream response")]
    UnexpectedUpstream,

    #[error("Romanization engine not ready")]
    EngineNotReady(Option<String>),

    /// Transport failures, romanization failures, anything else
    #[error("Translation failed")]
    Internal(#[from] anyhow::Error),
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingText | RelayError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            RelayError::UpstreamStatus(_) | RelayError::UnexpectedUpstream => StatusCode::BAD_GATEWAY,
            RelayError::EngineNotReady(_) => StatusCode::SERVICE_UNAVAILABLE,
            RelayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::Internal(err.into())
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        let body = match self {
            RelayError::UpstreamStatus(code) => json!({ "error": message, "status": code }),
            RelayError::InvalidQuery(reason) | RelayError::EngineNotReady(Some(reason)) => {
                json!({ "error": message, "details": reason })
            }
            RelayError::Internal(err) => {
                error!("Translation failed: {:#}", err);
                json!({ "error": message, "details": err.to_string() })
            }
            _ => json!({ "error": message }),
        };

        (status, Json(body)).into_response()
    }
}
