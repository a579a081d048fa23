//! Alert broadcast simulation
//!
//! No notifications are actually delivered. Each broadcast walks the fixed
//! recipient list and draws a channel, a delivery status and a message id
//! per recipient from the supplied random source.

use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use shared::{
    AlertMetadata, AlertRequest, AlertResponse, DeliveryChannel, DeliveryStatus,
    NotificationResult, Recipient, AFFECTED_RECIPIENTS,
};

const MESSAGE_ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const MESSAGE_ID_LEN: usize = 13;

/// Alert broadcast service
#[derive(Clone)]
pub struct AlertService {
    recipients: &'static [Recipient],
}

impl Default for AlertService {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertService {
    /// Create a service over the fixed recipient list
    pub fn new() -> Self {
        Self {
            recipients: AFFECTED_RECIPIENTS,
        }
    }

    /// Random source for one broadcast: seeded when a seed is configured
    pub fn simulation_rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Simulate broadcasting `request` to every recipient
    pub fn broadcast<R: Rng + ?Sized>(
        &self,
        request: &AlertRequest,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> AlertResponse {
        let alert_message = request.broadcast_message();
        tracing::debug!(
            disaster_type = %request.disaster_type,
            severity = %request.severity,
            location = %request.location,
            "Broadcasting alert: {}",
            alert_message
        );

        let notifications: Vec<NotificationResult> = self
            .recipients
            .iter()
            .map(|recipient| {
                let channel = DeliveryChannel::from_draw(rng.gen::<f64>());
                let delivery_status = DeliveryStatus::from_draw(rng.gen::<f64>());
                NotificationResult {
                    recipient_name: recipient.name.to_string(),
                    channel,
                    delivery_status,
                    message_id: generate_message_id(&mut *rng),
                    timestamp: now,
                }
            })
            .collect();

        let failed = notifications
            .iter()
            .filter(|n| n.delivery_status == DeliveryStatus::Failed)
            .count();
        tracing::info!(
            "Alert processed: {} notifications, {} failed",
            notifications.len(),
            failed
        );

        AlertResponse {
            success: true,
            message: "Alerts processed".to_string(),
            notifications,
            metadata: AlertMetadata {
                disaster_type: request.disaster_type,
                severity: request.severity,
                location: request.location.clone(),
                alert_message,
                sent_at: now,
            },
        }
    }
}

/// `msg_` followed by 13 random base-36 characters
pub fn generate_message_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suffix: String = (0..MESSAGE_ID_LEN)
        .map(|_| MESSAGE_ID_ALPHABET[rng.gen_range(0..MESSAGE_ID_ALPHABET.len())] as char)
        .collect();
    format!("msg_{}", suffix)
}
