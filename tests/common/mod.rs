use arzttext_service::config::{Config, OpenAiConfig, ServerConfig};
use arzttext_service::Application;
use secrecy::Secret;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the service on a random port against the given upstream
    /// base URL. `api_key: None` simulates a missing OPENAI_API_KEY.
    pub async fn spawn(openai_base_url: &str, api_key: Option<&str>) -> Self {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port
            },
            openai: OpenAiConfig {
                api_key: api_key.map(|key| Secret::new(key.to_string())),
                api_base_url: openai_base_url.to_string(),
                model: "gpt-4.1-mini".to_string(),
                temperature: 0.2,
                max_tokens: 512,
            },
            service_name: "arzttext-service-test".to_string(),
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub fn generate_url(&self) -> String {
        format!("{}/api/arzttext-ai", self.address)
    }
}
