//! Chatbot and health tests
//!
//! Tests for POST /api/chatbot and GET /health

mod common;

use axum::http::StatusCode;
use common::{app_with, get, post_json, post_raw, send, StubGenerator};
use disaster_response_backend::{config::Config, create_app, external::UnconfiguredGenerator, AppState};
use serde_json::json;
use shared::{ChatbotResponse, CHAT_MISSING_FIELDS_REPLY, CHAT_UNAVAILABLE_REPLY};
use std::sync::Arc;

// ============================================================================
// Chatbot Tests
// ============================================================================

#[tokio::test]
async fn test_chat_reply() {
    let stub = StubGenerator::replying("- Move to higher ground\n- Call 112");
    let (status, body) = send(
        app_with(stub.clone()),
        post_json(
            "/api/chatbot",
            &json!({ "query": "Water is entering my house", "disasterType": "flood" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let response: ChatbotResponse = serde_json::from_value(body).unwrap();
    assert!(response.success);
    assert!(response.response.contains("higher ground"));

    let prompt = stub.last_prompt().unwrap();
    assert!(prompt.starts_with("You are an emergency response assistant specialized in flood."));
    assert!(prompt.ends_with("User query: Water is entering my house"));
}

#[tokio::test]
async fn test_missing_query_rejected_without_generation() {
    let stub = StubGenerator::replying("unused");
    let (status, body) = send(
        app_with(stub.clone()),
        post_json("/api/chatbot", &json!({ "query": "   ", "disasterType": "fire" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["response"], CHAT_MISSING_FIELDS_REPLY);
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_missing_disaster_type_rejected() {
    let stub = StubGenerator::replying("unused");
    let (status, body) = send(
        app_with(stub.clone()),
        post_json("/api/chatbot", &json!({ "query": "Help" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let stub = StubGenerator::replying("unused");
    let (status, body) = send(app_with(stub.clone()), post_raw("/api/chatbot", "query=help")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["response"], CHAT_MISSING_FIELDS_REPLY);
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_generation_failure_hides_details() {
    let (status, body) = send(
        app_with(StubGenerator::failing(429)),
        post_json("/api/chatbot", &json!({ "query": "Help", "disasterType": "tsunami" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "response": CHAT_UNAVAILABLE_REPLY, "success": false })
    );
}

#[tokio::test]
async fn test_empty_reply_is_failure() {
    let (status, body) = send(
        app_with(StubGenerator::replying("")),
        post_json("/api/chatbot", &json!({ "query": "Help", "disasterType": "fire" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["response"], CHAT_UNAVAILABLE_REPLY);
}

// ============================================================================
// Health Tests
// ============================================================================

#[tokio::test]
async fn test_health_reports_generation() {
    let (status, body) = send(app_with(StubGenerator::replying("ok")), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["generation"], "configured");
}

#[tokio::test]
async fn test_health_without_api_key() {
    let app = create_app(AppState::new(Config::default(), Arc::new(UnconfiguredGenerator)));
    let (status, body) = send(app, get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["generation"], "unconfigured");
}

#[tokio::test]
async fn test_unconfigured_chat_fails_cleanly() {
    let app = create_app(AppState::new(Config::default(), Arc::new(UnconfiguredGenerator)));
    let (status, body) = send(
        app,
        post_json("/api/chatbot", &json!({ "query": "Help", "disasterType": "flood" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
}
