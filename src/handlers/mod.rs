//! HTTP handlers for the arzttext service.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::{
    dtos::{GenerateTextRequest, GenerateTextResponse},
    error::AppError,
    services::prompt,
    AppState,
};

/// Health check endpoint for deployment probes.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": state.config.service_name,
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Fallback for non-POST methods on the generation route.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Generate German letter prose from shorthand visit notes.
///
/// The body is read as a raw string rather than through the `Json`
/// extractor: a missing or malformed body degrades to an empty object
/// and is rejected as missing `notes`, never as a parse failure.
pub async fn generate_text(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<GenerateTextResponse>), AppError> {
    let request: GenerateTextRequest = serde_json::from_str(&body).unwrap_or_default();

    if request.notes.is_empty() {
        return Err(AppError::MissingNotes);
    }

    tracing::info!(notes_len = request.notes.len(), "Generating text from notes");

    let user_prompt = prompt::user_prompt(&request.notes);
    let ai_text = state
        .openai
        .complete(prompt::SYSTEM_PROMPT, &user_prompt)
        .await?;

    tracing::info!(text_len = ai_text.len(), "Generated text");

    Ok((StatusCode::OK, Json(GenerateTextResponse { ai_text })))
}
