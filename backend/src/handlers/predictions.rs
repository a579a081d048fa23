//! HTTP handlers for disaster predictions

use axum::{extract::State, Json};
use chrono::Utc;
use shared::{PredictionResponse, WeatherSeries};

use crate::error::{AppError, AppResult};
use crate::services::PredictionService;
use crate::AppState;

/// Predict disaster risk from the synthetic weather series
/// GET /api/predictions
pub async fn get_prediction(State(state): State<AppState>) -> AppResult<Json<PredictionResponse>> {
    // Stands in for sensor and weather feeds
    let series = WeatherSeries::synthetic();

    let service = PredictionService::new(
        state.generator.clone(),
        state.config.prediction.location.clone(),
    );
    let prediction = service
        .predict(&series, Utc::now())
        .await
        .map_err(|e| AppError::upstream("Failed to generate prediction", e))?;

    Ok(Json(prediction))
}
