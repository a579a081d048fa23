//! Business logic services for the Disaster Response Coordination Platform

pub mod alert;
pub mod chatbot;
pub mod prediction;
pub mod resource;

pub use alert::AlertService;
pub use chatbot::{ChatbotError, ChatbotService};
pub use prediction::PredictionService;
pub use resource::ResourceService;
