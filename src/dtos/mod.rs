use serde::{Deserialize, Serialize};

/// Inbound request body. A missing or unparseable body is treated as an
/// empty object, so `notes` defaults to the empty string and fails the
/// non-empty check downstream instead of surfacing a parse error.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateTextRequest {
    #[serde(default)]
    pub notes: String,
}

/// Successful response body.
#[derive(Debug, Serialize)]
pub struct GenerateTextResponse {
    #[serde(rename = "aiText")]
    pub ai_text: String,
}
