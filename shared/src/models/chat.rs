//! Chat assistant models

use serde::{Deserialize, Serialize};

/// Reply returned for validation failures
pub const CHAT_MISSING_FIELDS_REPLY: &str = "Both query and disasterType are required";
/// Reply returned when the guidance service cannot be reached
pub const CHAT_UNAVAILABLE_REPLY: &str =
    "I'm sorry, I'm having trouble connecting to the emergency guidance system.";
/// First message of every chat transcript
pub const CHAT_GREETING: &str = "How can I help you during this emergency?";

/// Author of a transcript message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    System,
}

/// A single transcript message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }
}

/// Body of `POST /api/chatbot`.
///
/// The disaster type is free text here; the assistant persona accepts any
/// hazard name, not only the coordinated disaster types.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatbotRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub disaster_type: String,
}

/// Response of `POST /api/chatbot`, for success and failure alike
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatbotResponse {
    pub response: String,
    pub success: bool,
}

impl ChatbotResponse {
    pub fn ok(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            success: true,
        }
    }

    pub fn failed(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            success: false,
        }
    }
}
