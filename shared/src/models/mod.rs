//! Domain models for the Disaster Response Coordination Platform

mod alert;
mod chat;
mod prediction;
mod resource;
mod zone;

pub use alert::*;
pub use chat::*;
pub use prediction::*;
pub use resource::*;
pub use zone::*;
