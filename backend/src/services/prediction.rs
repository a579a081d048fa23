//! Disaster risk prediction
//!
//! Sends the synthetic weather series to the text generator and derives a
//! risk level from the returned analysis with [`shared::classify_risk`].

use chrono::{DateTime, Utc};
use shared::{classify_risk, PredictionResponse, WeatherSeries};
use std::sync::Arc;

use crate::external::generation::{ensure_text, GenerationError, TextGenerator};

/// Prediction service
#[derive(Clone)]
pub struct PredictionService {
    generator: Arc<dyn TextGenerator>,
    location: String,
}

impl PredictionService {
    pub fn new(generator: Arc<dyn TextGenerator>, location: impl Into<String>) -> Self {
        Self {
            generator,
            location: location.into(),
        }
    }

    /// Generate an analysis of `series` and classify its risk level
    pub async fn predict(
        &self,
        series: &WeatherSeries,
        now: DateTime<Utc>,
    ) -> Result<PredictionResponse, GenerationError> {
        let prompt = prediction_prompt(series);
        let analysis = ensure_text(self.generator.generate(&prompt).await?)?;
        let risk_level = classify_risk(&analysis);

        tracing::info!("Prediction for {}: risk level {}", self.location, risk_level);

        Ok(PredictionResponse {
            risk_level,
            analysis,
            location: self.location.clone(),
            timestamp: now,
        })
    }
}

fn join(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prompt asking for a 1-10 risk assessment of the series
pub fn prediction_prompt(series: &WeatherSeries) -> String {
    format!(
        "Analyze this weather data and predict disaster risk:\n\
         Rainfall (mm): {}\n\
         River levels (m): {}\n\
         Temperature (°C): {}\n\
         \n\
         Provide:\n\
         1. Risk assessment on a scale of 1-10\n\
         2. Detailed recommendations\n\
         3. Potential impact areas\n\
         \n\
         Format with clear section headings.",
        join(&series.rainfall_mm),
        join(&series.river_levels_m),
        join(&series.temperature_celsius),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_series() {
        let prompt = prediction_prompt(&WeatherSeries::synthetic());
        assert!(prompt.contains("Rainfall (mm): 150, 200, 250, 300, 320"));
        assert!(prompt.contains("River levels (m): 2.1, 2.3, 2.5, 2.7, 3"));
        assert!(prompt.contains("Temperature (°C): 25, 26, 27, 28, 29"));
        assert!(prompt.contains("Risk assessment on a scale of 1-10"));
        assert!(prompt.ends_with("Format with clear section headings."));
    }
}
