//! Text generation capability
//!
//! Prediction and chat only ever need "prompt in, text out", so the
//! provider sits behind [`TextGenerator`] and can be swapped for a stub.

use async_trait::async_trait;
use thiserror::Error;

/// Failures talking to a text generation provider
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation service is not configured (missing API key)")]
    NotConfigured,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("prompt blocked by provider: {0}")]
    Blocked(String),

    #[error("generation service returned an empty response")]
    EmptyResponse,
}

/// A provider that turns a prompt into free-form text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Whether calls can succeed at all
    fn is_configured(&self) -> bool {
        true
    }
}

/// Reject blank provider output
pub fn ensure_text(text: String) -> Result<String, GenerationError> {
    if text.trim().is_empty() {
        Err(GenerationError::EmptyResponse)
    } else {
        Ok(text)
    }
}

/// Stand-in used when no API key is configured; every call fails
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredGenerator;

#[async_trait]
impl TextGenerator for UnconfiguredGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::NotConfigured)
    }

    fn is_configured(&self) -> bool {
        false
    }
}
