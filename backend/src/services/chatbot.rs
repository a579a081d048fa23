//! Emergency guidance chatbot
//!
//! Each query is sent as a single turn: the persona, the answer constraints
//! and the user's question are combined into one prompt. Transcript history
//! stays on the client and is never forwarded.

use shared::{validate_chatbot_request, ChatbotRequest, ValidationError};
use std::sync::Arc;
use thiserror::Error;

use crate::external::generation::{ensure_text, GenerationError, TextGenerator};

/// Chatbot failures, split by where they happened
#[derive(Debug, Error)]
pub enum ChatbotError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Emergency guidance unavailable: {0}")]
    Generation(#[from] GenerationError),
}

/// Chatbot service
#[derive(Clone)]
pub struct ChatbotService {
    generator: Arc<dyn TextGenerator>,
}

impl ChatbotService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Validate the request and generate guidance for it
    pub async fn respond(&self, request: &ChatbotRequest) -> Result<String, ChatbotError> {
        validate_chatbot_request(request)?;

        let prompt = chatbot_prompt(&request.query, &request.disaster_type);
        let response = ensure_text(self.generator.generate(&prompt).await?)?;

        tracing::debug!(
            disaster_type = %request.disaster_type,
            "Chatbot replied with {} characters",
            response.len()
        );
        Ok(response)
    }
}

/// Combined instruction-and-query prompt
pub fn chatbot_prompt(query: &str, disaster_type: &str) -> String {
    format!(
        "You are an emergency response assistant specialized in {disaster_type}.\n\
         Provide:\n\
         - Life-saving actions first\n\
         - Evacuation routes if applicable\n\
         - Emergency contact numbers\n\
         - Safety precautions\n\
         \n\
         Keep response under 300 words.\n\
         Use simple language.\n\
         Format with bullet points.\n\
         \n\
         User query: {query}"
    )
}
