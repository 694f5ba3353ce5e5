pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod services;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use services::OpenAiClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub openai: OpenAiClient,
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(config: Config) -> anyhow::Result<Self> {
        let openai = OpenAiClient::new(config.openai.clone())?;
        if openai.is_configured() {
            tracing::info!(model = %config.openai.model, "OpenAI client initialized");
        } else {
            tracing::warn!("OPENAI_API_KEY not set - text generation requests will fail");
        }

        let state = AppState {
            config: config.clone(),
            openai,
        };

        // The endpoint is called from a browser front end. CORS
        // preflight (OPTIONS) is answered by this layer and never
        // reaches the 405 fallback.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let router = Router::new()
            .route("/health", get(handlers::health_check))
            .route(
                "/api/arzttext-ai",
                post(handlers::generate_text).fallback(handlers::method_not_allowed),
            )
            .layer(cors)
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("-");

                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                }),
            )
            .with_state(state);

        // Port 0 binds a random port for tests.
        let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            e
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> anyhow::Result<()> {
        tracing::info!("Listening on port {}", self.port);
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }
}
