//! HTTP handlers

pub mod alerts;
pub mod chatbot;
pub mod health;
pub mod predictions;
pub mod resources;

pub use alerts::send_alert;
pub use chatbot::handle_chat;
pub use health::health_check;
pub use predictions::get_prediction;
pub use resources::{get_flood_zones, get_resources};
