//! Validation utilities for the Disaster Response Coordination Platform
//!
//! Blank strings are treated the same as missing fields everywhere.

use thiserror::Error;

use crate::models::{AlertRequest, AlertSubmission, ChatbotRequest, CHAT_MISSING_FIELDS_REPLY};
use crate::types::{DisasterType, Severity};

/// Disaster type used when the resources query omits one
pub const DEFAULT_RESOURCE_DISASTER_TYPE: DisasterType = DisasterType::Flood;
/// Location used when the resources query omits one
pub const DEFAULT_RESOURCE_LOCATION: &str = "River Valley";

/// Request validation failures. The display text is shown to users verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required fields ({})", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid disaster type")]
    InvalidDisasterType(String),

    #[error("Invalid severity")]
    InvalidSeverity(String),

    #[error("{}", CHAT_MISSING_FIELDS_REPLY)]
    MissingChatFields,
}

/// The value as given, unless it is absent or only whitespace
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

// ============================================================================
// Alerts
// ============================================================================

/// Validate an alert submission and convert it into a typed request.
///
/// All missing fields are reported together; enum values are only checked
/// once every required field is present.
pub fn validate_alert_submission(
    submission: &AlertSubmission,
) -> Result<AlertRequest, ValidationError> {
    let disaster_type = non_blank(submission.disaster_type.as_deref());
    let severity = non_blank(submission.severity.as_deref());
    let location = non_blank(submission.location.as_deref());

    let (disaster_type, severity, location) = match (disaster_type, severity, location) {
        (Some(d), Some(s), Some(l)) => (d, s, l),
        _ => {
            let missing = [
                ("disasterType", disaster_type.is_none()),
                ("severity", severity.is_none()),
                ("location", location.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, is_missing)| is_missing.then_some(name))
            .collect();
            return Err(ValidationError::MissingFields(missing));
        }
    };

    let disaster_type = disaster_type
        .parse::<DisasterType>()
        .map_err(|e| ValidationError::InvalidDisasterType(e.0))?;
    let severity = severity
        .parse::<Severity>()
        .map_err(|e| ValidationError::InvalidSeverity(e.0))?;

    Ok(AlertRequest {
        disaster_type,
        severity,
        location: location.to_string(),
        message: submission.message.clone().filter(|m| !m.trim().is_empty()),
    })
}

// ============================================================================
// Resources
// ============================================================================

/// Resolve the `disasterType` query parameter, defaulting when absent or blank
pub fn resolve_disaster_type_param(value: Option<&str>) -> Result<DisasterType, ValidationError> {
    match non_blank(value) {
        None => Ok(DEFAULT_RESOURCE_DISASTER_TYPE),
        Some(v) => v
            .parse()
            .map_err(|_| ValidationError::InvalidDisasterType(v.to_string())),
    }
}

/// Resolve the `location` query parameter, defaulting when absent or blank
pub fn resolve_location_param(value: Option<&str>) -> String {
    non_blank(value)
        .unwrap_or(DEFAULT_RESOURCE_LOCATION)
        .to_string()
}

// ============================================================================
// Chatbot
// ============================================================================

/// Both the query and the disaster type must be non-blank
pub fn validate_chatbot_request(request: &ChatbotRequest) -> Result<(), ValidationError> {
    if request.query.trim().is_empty() || request.disaster_type.trim().is_empty() {
        return Err(ValidationError::MissingChatFields);
    }
    Ok(())
}
