//! HTTP handlers for the emergency guidance chatbot

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use shared::{
    ChatbotRequest, ChatbotResponse, CHAT_MISSING_FIELDS_REPLY, CHAT_UNAVAILABLE_REPLY,
};

use crate::services::{ChatbotError, ChatbotService};
use crate::AppState;

/// Answer an emergency guidance query
/// POST /api/chatbot
///
/// Failures never carry details: validation problems get one fixed reply
/// and every downstream failure gets another.
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatbotRequest>, JsonRejection>,
) -> Result<Json<ChatbotResponse>, (StatusCode, Json<ChatbotResponse>)> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Rejected chatbot request body: {}", e.body_text());
        missing_fields()
    })?;

    let service = ChatbotService::new(state.generator.clone());
    match service.respond(&request).await {
        Ok(response) => Ok(Json(ChatbotResponse::ok(response))),
        Err(ChatbotError::Validation(e)) => {
            tracing::warn!("Rejected chatbot request: {}", e);
            Err(missing_fields())
        }
        Err(e @ ChatbotError::Generation(_)) => {
            tracing::error!("Chatbot error: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatbotResponse::failed(CHAT_UNAVAILABLE_REPLY)),
            ))
        }
    }
}

fn missing_fields() -> (StatusCode, Json<ChatbotResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ChatbotResponse::failed(CHAT_MISSING_FIELDS_REPLY)),
    )
}
