//! Disaster Response Coordination Platform - Backend
//!
//! Alert broadcasting, resource allocation, risk prediction and an emergency
//! guidance chatbot behind a small JSON API.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;
use external::{GeminiClient, GenerationError, TextGenerator, UnconfiguredGenerator};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(config: Config, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            config: Arc::new(config),
            generator,
        }
    }

    /// Build state with the text generator described by `config`
    pub fn from_config(config: Config) -> Result<Self, GenerationError> {
        let generator: Arc<dyn TextGenerator> = if config.generation.is_configured() {
            Arc::new(GeminiClient::new(&config.generation)?)
        } else {
            tracing::warn!("No generation API key configured; predictions and chat will fail");
            Arc::new(UnconfiguredGenerator)
        };
        Ok(Self::new(config, generator))
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Disaster Response Coordination Platform API v1.0"
}
