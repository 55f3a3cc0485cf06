use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("GOOGLE_API_KEY environment variable is not set")]
    MissingApiKey,

    #[error("Invalid request body: {0}")]
    InvalidPayload(#[source] serde_json::Error),

    #[error("Google API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Google API error: {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error("Unexpected API response structure")]
    UnexpectedResponse,

    #[error("Could not parse JSON from AI response")]
    NoJsonInResponse,

    #[error("Could not parse JSON from AI response: {0}")]
    InvalidJson(#[source] serde_json::Error),
}

/// Error envelope returned to callers: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for RecommendationError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
