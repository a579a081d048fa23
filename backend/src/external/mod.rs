//! External API integrations

pub mod gemini;
pub mod generation;

pub use gemini::GeminiClient;
pub use generation::{GenerationError, TextGenerator, UnconfiguredGenerator};
