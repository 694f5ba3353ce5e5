use anyhow::Result;
use dotenvy::dotenv;
use secrecy::Secret;
use serde::Deserialize;
use std::env;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub openai: OpenAiConfig,
    pub service_name: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug)]
pub struct OpenAiConfig {
    /// Absent key is a per-request 500, not a boot failure, so /health
    /// stays reachable on a misconfigured deployment.
    pub api_key: Option<Secret<String>>,
    pub api_base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let host = env::var("ARZTTEXT_SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("ARZTTEXT_SERVICE_PORT")
            .unwrap_or_else(|_| "3005".to_string())
            .parse()?;

        let api_key = env::var("OPENAI_API_KEY").ok().map(Secret::new);
        let api_base_url = env::var("OPENAI_API_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4.1-mini".to_string());

        Ok(Self {
            server: ServerConfig { host, port },
            openai: OpenAiConfig {
                api_key,
                api_base_url,
                model,
                temperature: 0.2,
                max_tokens: 512,
            },
            service_name: "arzttext-service".to_string(),
        })
    }
}
