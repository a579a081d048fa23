//! Alert broadcast models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{DisasterType, Severity};

/// Alert form submission as received over the wire.
///
/// Every field is optional here so that missing fields can be reported
/// together by [`crate::validation::validate_alert_submission`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertSubmission {
    #[serde(default)]
    pub disaster_type: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A validated alert request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertRequest {
    pub disaster_type: DisasterType,
    pub severity: Severity,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AlertRequest {
    /// Text broadcast to recipients: the custom message, or a generated warning
    pub fn broadcast_message(&self) -> String {
        match self.message.as_deref() {
            Some(custom) if !custom.trim().is_empty() => custom.to_string(),
            _ => format!(
                "EMERGENCY ALERT: {} {} warning for {}. Follow instructions from local authorities.",
                self.severity.as_str().to_uppercase(),
                self.disaster_type,
                self.location
            ),
        }
    }
}

impl From<AlertRequest> for AlertSubmission {
    fn from(r: AlertRequest) -> Self {
        AlertSubmission {
            disaster_type: Some(r.disaster_type.to_string()),
            severity: Some(r.severity.to_string()),
            location: Some(r.location),
            message: r.message,
        }
    }
}

/// A simulated person notified during a broadcast
#[derive(Debug, Clone, Serialize)]
pub struct Recipient {
    pub name: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub location: Option<&'static str>,
}

/// Fixed recipient list; not derived from the alert location
pub const AFFECTED_RECIPIENTS: &[Recipient] = &[
    Recipient {
        name: "John Doe",
        phone: "+1234567890",
        email: "john@example.com",
        location: Some("123 Main St"),
    },
    Recipient {
        name: "Jane Smith",
        phone: "+0987654321",
        email: "jane@example.com",
        location: Some("456 Oak Ave"),
    },
];

/// Channel a notification was sent through
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeliveryChannel {
    #[serde(rename = "SMS")]
    Sms,
    Email,
    Push,
}

impl DeliveryChannel {
    /// Map a uniform draw in `[0, 1)` to a channel: above 0.5 is SMS, otherwise Email
    pub fn from_draw(draw: f64) -> Self {
        if draw > 0.5 {
            DeliveryChannel::Sms
        } else {
            DeliveryChannel::Email
        }
    }
}

/// Simulated delivery outcome
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Queued,
    Delivered,
    Failed,
}

impl DeliveryStatus {
    /// Map a uniform draw in `[0, 1)` to a status: above 0.2 is delivered, otherwise failed
    pub fn from_draw(draw: f64) -> Self {
        if draw > 0.2 {
            DeliveryStatus::Delivered
        } else {
            DeliveryStatus::Failed
        }
    }
}

/// One entry of the notification manifest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResult {
    pub recipient_name: String,
    pub channel: DeliveryChannel,
    pub delivery_status: DeliveryStatus,
    pub message_id: String,
    pub timestamp: DateTime<Utc>,
}

/// Request echo attached to a broadcast response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertMetadata {
    pub disaster_type: DisasterType,
    pub severity: Severity,
    pub location: String,
    pub alert_message: String,
    pub sent_at: DateTime<Utc>,
}

/// Response of `POST /api/alerts`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertResponse {
    pub success: bool,
    pub message: String,
    pub notifications: Vec<NotificationResult>,
    pub metadata: AlertMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(message: Option<&str>) -> AlertRequest {
        AlertRequest {
            disaster_type: DisasterType::Flood,
            severity: Severity::High,
            location: "River Valley".to_string(),
            message: message.map(String::from),
        }
    }

    #[test]
    fn test_default_broadcast_message() {
        assert_eq!(
            request(None).broadcast_message(),
            "EMERGENCY ALERT: HIGH flood warning for River Valley. Follow instructions from local authorities."
        );
        // Blank custom text falls back to the generated warning
        assert!(request(Some("  ")).broadcast_message().starts_with("EMERGENCY ALERT"));
    }

    #[test]
    fn test_custom_broadcast_message() {
        assert_eq!(
            request(Some("Move to higher ground")).broadcast_message(),
            "Move to higher ground"
        );
    }

    #[test]
    fn test_draw_thresholds() {
        assert_eq!(DeliveryChannel::from_draw(0.51), DeliveryChannel::Sms);
        assert_eq!(DeliveryChannel::from_draw(0.5), DeliveryChannel::Email);
        assert_eq!(DeliveryStatus::from_draw(0.21), DeliveryStatus::Delivered);
        assert_eq!(DeliveryStatus::from_draw(0.2), DeliveryStatus::Failed);
        assert_eq!(DeliveryStatus::from_draw(0.0), DeliveryStatus::Failed);
    }

    #[test]
    fn test_notification_wire_format() {
        let json = serde_json::json!({
            "recipientName": "John Doe",
            "channel": "SMS",
            "deliveryStatus": "delivered",
            "messageId": "msg_abc",
            "timestamp": "2024-06-01T10:00:00Z"
        });
        let parsed: NotificationResult = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.channel, DeliveryChannel::Sms);
        assert_eq!(parsed.delivery_status, DeliveryStatus::Delivered);
    }

    #[test]
    fn test_submission_accepts_missing_fields() {
        let parsed: AlertSubmission =
            serde_json::from_str(r#"{"disasterType":"fire"}"#).unwrap();
        assert_eq!(parsed.disaster_type.as_deref(), Some("fire"));
        assert!(parsed.severity.is_none());
        assert!(parsed.location.is_none());
    }
}
