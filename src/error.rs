use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Service error. Every variant maps to an HTTP response with a
/// plain-text body; clients depend on the exact wording.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Missing 'notes' field in request body")]
    MissingNotes,

    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    #[error("OpenAI API error: {0}")]
    Upstream(String),

    #[error("No AI message returned")]
    EmptyCompletion,

    #[error("Server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::MissingNotes => StatusCode::BAD_REQUEST,
            AppError::MissingApiKey
            | AppError::Upstream(_)
            | AppError::EmptyCompletion
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
