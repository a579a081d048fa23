//! Route definitions for the Disaster Response Coordination Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Alert broadcasting
        .route("/alerts", post(handlers::send_alert))
        // Resource allocation
        .route("/resources", get(handlers::get_resources))
        // Risk prediction
        .route("/predictions", get(handlers::get_prediction))
        // Guidance chatbot
        .route("/chatbot", post(handlers::handle_chat))
        // Map overlay data
        .route("/flood-zones", get(handlers::get_flood_zones))
}
