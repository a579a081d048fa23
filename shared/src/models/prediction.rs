//! Disaster prediction models and risk classification

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Risk level reported when the analysis mentions "high risk"
pub const HIGH_RISK_LEVEL: u8 = 8;
/// Risk level reported when the analysis mentions "moderate risk"
pub const MODERATE_RISK_LEVEL: u8 = 5;
/// Risk level reported when neither phrase appears
pub const DEFAULT_RISK_LEVEL: u8 = 3;

/// Weather time series fed to the prediction prompt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSeries {
    pub rainfall_mm: Vec<f64>,
    pub river_levels_m: Vec<f64>,
    pub temperature_celsius: Vec<f64>,
}

impl WeatherSeries {
    /// The fixed synthetic dataset used in place of sensor ingestion
    pub fn synthetic() -> Self {
        Self {
            rainfall_mm: vec![150.0, 200.0, 250.0, 300.0, 320.0],
            river_levels_m: vec![2.1, 2.3, 2.5, 2.7, 3.0],
            temperature_celsius: vec![25.0, 26.0, 27.0, 28.0, 29.0],
        }
    }
}

/// Classify generated analysis text into a 1-10 risk level.
///
/// Only the exact lowercase phrases "high risk" and "moderate risk" are
/// recognised; anything else falls through to [`DEFAULT_RISK_LEVEL`].
pub fn classify_risk(analysis: &str) -> u8 {
    if analysis.contains("high risk") {
        HIGH_RISK_LEVEL
    } else if analysis.contains("moderate risk") {
        MODERATE_RISK_LEVEL
    } else {
        DEFAULT_RISK_LEVEL
    }
}

/// Human label for a risk level
pub fn risk_label(risk_level: u8) -> &'static str {
    match risk_level {
        8..=u8::MAX => "High",
        4..=7 => "Medium",
        _ => "Low",
    }
}

/// Response of `GET /api/predictions`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    pub risk_level: u8,
    pub analysis: String,
    pub location: String,
    pub timestamp: DateTime<Utc>,
}

impl PredictionResponse {
    /// Whether the dashboard should raise its high-risk banner
    pub fn is_high_risk(&self) -> bool {
        self.risk_level > 7
    }
}

/// Row of the dashboard's recent predictions table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecentPrediction {
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub risk_level: u8,
    /// Label shown next to the level; recorded per row rather than derived
    pub risk_label: String,
    pub time: String,
}

impl RecentPrediction {
    fn new(kind: &str, location: &str, risk_level: u8, risk_label: &str, time: &str) -> Self {
        Self {
            kind: kind.to_string(),
            location: location.to_string(),
            risk_level,
            risk_label: risk_label.to_string(),
            time: time.to_string(),
        }
    }

    /// Risk cell text, e.g. "High (8/10)"
    pub fn risk_display(&self) -> String {
        format!("{} ({}/10)", self.risk_label, self.risk_level)
    }
}

/// Static rows shown when no recent predictions are available.
///
/// Labels are kept as published, so they need not agree with [`risk_label`]:
/// the Hyderabad row reads "Medium (2/10)".
pub fn fallback_recent_predictions() -> Vec<RecentPrediction> {
    vec![
        RecentPrediction::new("Flood", "Kerala", 8, "High", "Today 14:30"),
        RecentPrediction::new("Landslide", "Chennai", 5, "Medium", "Today 15:45"),
        RecentPrediction::new("Landslide", "Hyderabad", 2, "Medium", "Today 11:50"),
        RecentPrediction::new("Fire", "Rajahmundry", 1, "Low", "Today 10:45"),
    ]
}
