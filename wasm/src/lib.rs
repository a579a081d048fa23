//! WebAssembly module for the Disaster Response Coordination Platform
//!
//! Provides client-side logic for:
//! - Risk classification and labels
//! - Alert form validation
//! - Chat and alert page state
//! - Map overlay data

use chrono::{DateTime, Utc};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;
pub use shared::views::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    log("disaster response client module loaded");
}

fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

fn to_js_error(message: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&message.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization failed: {}", e))
}

/// Current time from the browser clock
fn browser_now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

// ============================================================================
// Risk
// ============================================================================

/// Risk level (8, 5 or 3) for a generated analysis
#[wasm_bindgen]
pub fn classify_risk_level(analysis: &str) -> u8 {
    classify_risk(analysis)
}

/// "High", "Medium" or "Low" for a risk level
#[wasm_bindgen]
pub fn risk_level_label(risk_level: u8) -> String {
    risk_label(risk_level).to_string()
}

/// Banner text for a prediction response, empty when risk is not high
#[wasm_bindgen]
pub fn high_risk_banner(prediction_json: &str) -> Result<String, JsValue> {
    banner_for(prediction_json).map_err(to_js_error)
}

fn banner_for(prediction_json: &str) -> Result<String, String> {
    let prediction: PredictionResponse = serde_json::from_str(prediction_json)
        .map_err(|e| format!("Invalid prediction JSON: {}", e))?;
    let mut view = DashboardView::default();
    let ticket = view.prediction.begin();
    view.prediction.resolve(ticket, Ok(prediction));
    Ok(view.high_risk_banner().unwrap_or_default())
}

/// Recent predictions table shown until a live feed exists
#[wasm_bindgen]
pub fn recent_predictions_json() -> Result<String, JsValue> {
    to_json(&fallback_recent_predictions()).map_err(to_js_error)
}

// ============================================================================
// Alerts and resources
// ============================================================================

/// Validate an alert form; returns the message that would be broadcast
#[wasm_bindgen]
pub fn validate_alert_json(submission_json: &str) -> Result<String, JsValue> {
    preview_alert(submission_json).map_err(to_js_error)
}

fn preview_alert(submission_json: &str) -> Result<String, String> {
    let submission: AlertSubmission =
        serde_json::from_str(submission_json).map_err(|_| "Invalid request body".to_string())?;
    let request = validate_alert_submission(&submission).map_err(|e| e.to_string())?;
    Ok(request.broadcast_message())
}

/// `/api/resources` URL for a selection
#[wasm_bindgen]
pub fn resource_query_url(disaster_type: &str, location: &str) -> String {
    format!(
        "/api/resources?disasterType={}&location={}",
        js_sys::encode_uri_component(disaster_type),
        js_sys::encode_uri_component(location)
    )
}

/// Flood-prone zones with the map centre and zoom
#[wasm_bindgen]
pub fn flood_map_json() -> Result<String, JsValue> {
    #[derive(Serialize)]
    struct FloodMap {
        center: LatLng,
        zoom: u8,
        zones: Vec<FloodZone>,
    }

    to_json(&FloodMap {
        center: MAP_CENTER,
        zoom: MAP_ZOOM,
        zones: flood_zones(),
    })
    .map_err(to_js_error)
}

/// Alert page state held on the JavaScript side
#[wasm_bindgen]
#[derive(Default)]
pub struct AlertsSession {
    view: AlertsView,
}

#[wasm_bindgen]
impl AlertsSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a submission; `undefined` while one is already in flight
    pub fn begin(&mut self, submission_json: &str) -> Result<Option<u64>, JsValue> {
        let submission: AlertSubmission = serde_json::from_str(submission_json)
            .map_err(|_| to_js_error("Invalid request body"))?;
        Ok(self.view.begin(submission).map(|ticket| ticket.0))
    }

    /// Settle a submission with the response body or an error message.
    /// Returns the outcome JSON, or `undefined` for a superseded ticket.
    pub fn complete(
        &mut self,
        ticket: u64,
        response_json: Option<String>,
        error: Option<String>,
    ) -> Result<Option<String>, JsValue> {
        let result = settle(response_json, error);
        let outcome = self
            .view
            .complete(RequestTicket(ticket), result, browser_now());
        outcome
            .map(|o| to_json(&o))
            .transpose()
            .map_err(to_js_error)
    }

    pub fn is_loading(&self) -> bool {
        self.view.submission.is_loading()
    }

    #[wasm_bindgen(js_name = historyJson)]
    pub fn history_json(&self) -> Result<String, JsValue> {
        to_json(&self.view.history()).map_err(to_js_error)
    }
}

// ============================================================================
// Chat
// ============================================================================

#[derive(Serialize)]
struct PendingChat {
    ticket: u64,
    request: ChatbotRequest,
}

/// Chat transcript held on the JavaScript side
#[wasm_bindgen]
pub struct ChatSession {
    transcript: ChatTranscript,
}

#[wasm_bindgen]
impl ChatSession {
    #[wasm_bindgen(constructor)]
    pub fn new(disaster_type: Option<String>) -> Self {
        let transcript = match disaster_type {
            Some(disaster_type) if !disaster_type.trim().is_empty() => {
                ChatTranscript::new(disaster_type)
            }
            _ => ChatTranscript::default(),
        };
        Self { transcript }
    }

    /// Append the user's message; returns `{ticket, request}` to POST, or
    /// `undefined` when the input is ignored
    pub fn submit(&mut self, input: &str) -> Result<Option<String>, JsValue> {
        let pending = self
            .transcript
            .submit(input)
            .map(|(ticket, request)| PendingChat {
                ticket: ticket.0,
                request,
            });
        pending
            .map(|p| to_json(&p))
            .transpose()
            .map_err(to_js_error)
    }

    /// Record the reply body or the transport error for `ticket`
    pub fn receive(
        &mut self,
        ticket: u64,
        response_json: Option<String>,
        error: Option<String>,
    ) -> bool {
        let accepted = self
            .transcript
            .receive(RequestTicket(ticket), settle(response_json, error));
        if !accepted {
            log("dropped a superseded chat reply");
        }
        accepted
    }

    pub fn is_loading(&self) -> bool {
        self.transcript.is_loading()
    }

    #[wasm_bindgen(js_name = messagesJson)]
    pub fn messages_json(&self) -> Result<String, JsValue> {
        to_json(&self.transcript.messages()).map_err(to_js_error)
    }
}

/// Decode a response body, or carry the error through
fn settle<T: serde::de::DeserializeOwned>(
    response_json: Option<String>,
    error: Option<String>,
) -> Result<T, String> {
    match (response_json, error) {
        (_, Some(error)) => Err(error),
        (Some(body), None) => {
            serde_json::from_str(&body).map_err(|e| format!("Invalid response: {}", e))
        }
        (None, None) => Err("No response".to_string()),
    }
}
