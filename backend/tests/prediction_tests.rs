//! Risk prediction tests
//!
//! Tests for GET /api/predictions including:
//! - Property 4: Risk level is one of 8, 5 or 3

mod common;

use axum::http::StatusCode;
use common::{app_with, get, send, StubGenerator};
use proptest::prelude::*;
use shared::{classify_risk, PredictionResponse};

// ============================================================================
// API Tests
// ============================================================================

#[tokio::test]
async fn test_high_risk_analysis() {
    let stub = StubGenerator::replying("Overall: high risk of flooding along the river banks.");
    let (status, body) = send(app_with(stub.clone()), get("/api/predictions")).await;

    assert_eq!(status, StatusCode::OK);
    let prediction: PredictionResponse = serde_json::from_value(body).unwrap();
    assert_eq!(prediction.risk_level, 8);
    assert!(prediction.is_high_risk());
    assert_eq!(prediction.location, "Kerala");
    assert!(prediction.analysis.contains("high risk"));
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn test_moderate_risk_analysis() {
    let stub = StubGenerator::replying("There is a moderate risk of waterlogging.");
    let (status, body) = send(app_with(stub), get("/api/predictions")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["riskLevel"], 5);
}

#[tokio::test]
async fn test_default_risk_analysis() {
    let stub = StubGenerator::replying("Conditions look stable. HIGH RISK is not expected.");
    let (status, body) = send(app_with(stub), get("/api/predictions")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["riskLevel"], 3);
}

#[tokio::test]
async fn test_prompt_carries_weather_series() {
    let stub = StubGenerator::replying("low risk");
    send(app_with(stub.clone()), get("/api/predictions")).await;

    let prompt = stub.last_prompt().unwrap();
    assert!(prompt.contains("Rainfall (mm): 150, 200, 250, 300, 320"));
    assert!(prompt.contains("River levels (m): 2.1, 2.3, 2.5, 2.7, 3"));
    assert!(prompt.contains("Risk assessment on a scale of 1-10"));
}

#[tokio::test]
async fn test_generation_failure() {
    let (status, body) = send(app_with(StubGenerator::failing(503)), get("/api/predictions")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({ "error": "Failed to generate prediction" }));
}

#[tokio::test]
async fn test_empty_analysis_is_failure() {
    let (status, body) = send(app_with(StubGenerator::replying("  ")), get("/api/predictions")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to generate prediction");
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property 4: Any analysis text maps onto exactly one of the three levels
    #[test]
    fn prop_risk_level_domain(analysis in ".{0,200}") {
        let level = classify_risk(&analysis);
        prop_assert!(level == 8 || level == 5 || level == 3);
    }

    /// "high risk" wins whenever it appears
    #[test]
    fn prop_high_risk_wins(prefix in "[a-z ]{0,40}", suffix in "[a-z ]{0,40}") {
        let analysis = format!("{}high risk{} moderate risk", prefix, suffix);
        prop_assert_eq!(classify_risk(&analysis), 8);
    }
}
