//! Shared types and models for the Disaster Response Coordination Platform
//!
//! This crate contains types shared between the backend, the browser UI
//! (via WASM), and the view state machines that drive it.

pub mod models;
pub mod types;
pub mod validation;
pub mod views;

pub use models::*;
pub use types::*;
pub use validation::*;
pub use views::*;
