//! OpenAI Chat Completions client.
//!
//! One non-streaming call per request; no retries. The base URL is
//! configurable so tests can point the client at a stub server.

use crate::config::OpenAiConfig;
use crate::error::AppError;
use anyhow::anyhow;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

/// Client for the OpenAI Chat Completions API.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    config: OpenAiConfig,
}

/// Request body for `POST /chat/completions`.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response body from a successful completion call. Only the first
/// choice's message content is used.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()?;

        Ok(Self { client, config })
    }

    /// Whether an API key is present. The service still starts without
    /// one; generation requests fail until it is configured.
    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Send the system/user prompt pair and return the first candidate's
    /// text content.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, AppError> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or(AppError::MissingApiKey)?;

        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let url = format!("{}/chat/completions", self.config.api_base_url);

        tracing::debug!(
            model = %self.config.model,
            user_len = user.len(),
            "Sending completion request to OpenAI"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Internal(anyhow!("completion request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(%status, error = %error_text, "OpenAI API error");
            return Err(AppError::Upstream(error_text));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::Internal(anyhow!("failed to parse completion response: {}", e)))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.is_empty())
            .ok_or(AppError::EmptyCompletion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_openai_wire_format() {
        let request = ChatCompletionRequest {
            model: "gpt-4.1-mini",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "Du bist ein Assistent.",
                },
                ChatMessage {
                    role: "user",
                    content: "Stichworte",
                },
            ],
            temperature: 0.2,
            max_tokens: 512,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4.1-mini");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        let temperature = value["temperature"].as_f64().unwrap();
        assert!((temperature - 0.2).abs() < 1e-6);
        assert_eq!(value["max_tokens"], 512);
    }

    #[test]
    fn response_with_missing_content_deserializes() {
        let completion: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant"}}]}"#).unwrap();
        assert!(completion.choices[0].message.content.is_none());

        let empty: ChatCompletionResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.choices.is_empty());
    }
}
