//! HTTP handlers for alert broadcasting

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::Utc;
use shared::{validate_alert_submission, AlertResponse, AlertSubmission};

use crate::error::{AppError, AppResult};
use crate::services::AlertService;
use crate::AppState;

/// Broadcast a disaster alert
/// POST /api/alerts
///
/// Validates the request, then simulates delivery to the fixed recipient
/// list. Simulated delivery failures are reported, never retried.
pub async fn send_alert(
    State(state): State<AppState>,
    payload: Result<Json<AlertSubmission>, JsonRejection>,
) -> AppResult<Json<AlertResponse>> {
    let Json(submission) = payload.map_err(|e| AppError::InvalidRequestBody(e.body_text()))?;
    let request = validate_alert_submission(&submission)?;

    if let Some(message) = &request.message {
        tracing::debug!("Received message: {}", message);
    }

    let mut rng = AlertService::simulation_rng(state.config.alerts.simulation_seed);
    let response = AlertService::new().broadcast(&request, &mut rng, Utc::now());

    Ok(Json(response))
}
