//! Client view state machines
//!
//! Each page of the UI drives one request at a time through
//! idle → loading → success | error. Every request is issued a
//! [`RequestTicket`]; starting a new request supersedes the previous ticket,
//! and results for superseded tickets are dropped so a slow stale response
//! can never overwrite a newer one.
//!
//! Nothing here is persisted: a page reload starts from [`Default`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{
    fallback_recent_predictions, AlertResponse, AlertSubmission, ChatMessage, ChatbotRequest,
    ChatbotResponse, PredictionResponse, RecentPrediction, ResourceQuery, ResourceResponse,
    CHAT_GREETING, CHAT_UNAVAILABLE_REPLY,
};
use crate::types::DisasterType;

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestTicket(pub u64);

/// State of a single-request view
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(String),
}

/// A view's state plus the ticket of its outstanding request
#[derive(Debug, Clone)]
pub struct RequestView<T> {
    state: ViewState<T>,
    latest: u64,
}

impl<T> Default for RequestView<T> {
    fn default() -> Self {
        Self {
            state: ViewState::Idle,
            latest: 0,
        }
    }
}

impl<T> RequestView<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match &self.state {
            ViewState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Start a request, superseding any outstanding one
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        self.state = ViewState::Loading;
        RequestTicket(self.latest)
    }

    /// Whether `ticket` belongs to the outstanding request
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest && self.is_loading()
    }

    /// Settle a request. Returns false, leaving the state untouched, when the
    /// ticket was superseded or already settled.
    pub fn resolve(&mut self, ticket: RequestTicket, result: Result<T, String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state = match result {
            Ok(data) => ViewState::Success(data),
            Err(message) => ViewState::Error(message),
        };
        true
    }
}

// ============================================================================
// Dashboard
// ============================================================================

/// Prediction dashboard
#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    pub prediction: RequestView<PredictionResponse>,
}

impl DashboardView {
    /// Banner text shown when the latest prediction is high risk
    pub fn high_risk_banner(&self) -> Option<String> {
        self.prediction
            .data()
            .filter(|p| p.is_high_risk())
            .map(|p| format!("High Risk Alert: Potential disaster in {}.", p.location))
    }

    /// Rows for the recent predictions table. There is no live feed yet, so
    /// this is always the static table whatever the prediction state.
    pub fn recent_predictions(&self) -> Vec<RecentPrediction> {
        fallback_recent_predictions()
    }
}

// ============================================================================
// Alerts
// ============================================================================

/// Entry of the session's sent-alert history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertHistoryItem {
    #[serde(flatten)]
    pub request: AlertSubmission,
    pub timestamp: DateTime<Utc>,
    pub recipients: usize,
}

/// Result message surfaced to the user after a submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlertOutcome {
    pub success: bool,
    pub message: String,
}

/// Alert broadcast page
#[derive(Debug, Clone, Default)]
pub struct AlertsView {
    pub submission: RequestView<AlertResponse>,
    pending: Option<AlertSubmission>,
    history: Vec<AlertHistoryItem>,
}

impl AlertsView {
    /// Start a submission. The form is disabled while one is in flight, so
    /// this returns `None` instead of superseding it.
    pub fn begin(&mut self, submission: AlertSubmission) -> Option<RequestTicket> {
        if self.submission.is_loading() {
            return None;
        }
        self.pending = Some(submission);
        Some(self.submission.begin())
    }

    /// Settle the in-flight submission
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: Result<AlertResponse, String>,
        now: DateTime<Utc>,
    ) -> Option<AlertOutcome> {
        if !self.submission.is_current(ticket) {
            return None;
        }
        let request = self.pending.take().unwrap_or_default();

        let outcome = match &result {
            Ok(response) => {
                let recipients = response.notifications.len();
                self.history.insert(
                    0,
                    AlertHistoryItem {
                        request,
                        timestamp: now,
                        recipients,
                    },
                );
                AlertOutcome {
                    success: true,
                    message: format!("Alerts sent to {} recipients", recipients),
                }
            }
            Err(message) => AlertOutcome {
                success: false,
                message: message.clone(),
            },
        };

        self.submission.resolve(ticket, result);
        Some(outcome)
    }

    /// Sent alerts, newest first
    pub fn history(&self) -> &[AlertHistoryItem] {
        &self.history
    }
}

// ============================================================================
// Resources
// ============================================================================

/// Location the resources page opens with
pub const RESOURCES_VIEW_DEFAULT_LOCATION: &str = "Kerala";

/// Resource allocation page
#[derive(Debug, Clone)]
pub struct ResourcesView {
    disaster_type: DisasterType,
    location: String,
    pub resources: RequestView<ResourceResponse>,
}

impl Default for ResourcesView {
    fn default() -> Self {
        Self {
            disaster_type: DisasterType::Flood,
            location: RESOURCES_VIEW_DEFAULT_LOCATION.to_string(),
            resources: RequestView::new(),
        }
    }
}

impl ResourcesView {
    pub fn disaster_type(&self) -> DisasterType {
        self.disaster_type
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Change the disaster type; starts a new fetch
    pub fn set_disaster_type(&mut self, disaster_type: DisasterType) -> RequestTicket {
        self.disaster_type = disaster_type;
        self.resources.begin()
    }

    /// Change the location; every edit starts a new fetch
    pub fn set_location(&mut self, location: impl Into<String>) -> RequestTicket {
        self.location = location.into();
        self.resources.begin()
    }

    /// Query for the current selection
    pub fn query(&self) -> ResourceQuery {
        ResourceQuery {
            disaster_type: Some(self.disaster_type.to_string()),
            location: Some(self.location.clone()),
        }
    }

    /// Text shown when the loaded list is empty
    pub fn empty_message(&self) -> Option<String> {
        self.resources
            .data()
            .filter(|r| r.allocated_resources.is_empty())
            .map(|r| {
                format!(
                    "No resources available for {} in {}",
                    r.disaster_type, r.location
                )
            })
    }

    /// Badge text, e.g. "1 resource" or "3 resources"
    pub fn count_label(&self) -> Option<String> {
        self.resources.data().map(|r| {
            let n = r.allocated_resources.len();
            format!("{} {}", n, if n == 1 { "resource" } else { "resources" })
        })
    }
}

// ============================================================================
// Chat
// ============================================================================

/// Chat assistant transcript.
///
/// Messages are only ever appended; insertion order is display order.
#[derive(Debug, Clone)]
pub struct ChatTranscript {
    disaster_type: String,
    messages: Vec<ChatMessage>,
    reply: RequestView<()>,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new(DisasterType::Flood.as_str())
    }
}

impl ChatTranscript {
    pub fn new(disaster_type: impl Into<String>) -> Self {
        Self {
            disaster_type: disaster_type.into(),
            messages: vec![ChatMessage::system(CHAT_GREETING)],
            reply: RequestView::new(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.reply.is_loading()
    }

    /// Append the user's message and build the request for it.
    ///
    /// Blank input, or input while a reply is pending, is ignored.
    pub fn submit(&mut self, input: &str) -> Option<(RequestTicket, ChatbotRequest)> {
        if input.trim().is_empty() || self.reply.is_loading() {
            return None;
        }
        self.messages.push(ChatMessage::user(input));
        let ticket = self.reply.begin();
        Some((
            ticket,
            ChatbotRequest {
                query: input.to_string(),
                disaster_type: self.disaster_type.clone(),
            },
        ))
    }

    /// Append the assistant's reply, or the fixed fallback on any failure
    pub fn receive(&mut self, ticket: RequestTicket, result: Result<ChatbotResponse, String>) -> bool {
        if !self.reply.is_current(ticket) {
            return false;
        }
        let content = match &result {
            Ok(reply) if reply.success => reply.response.clone(),
            _ => CHAT_UNAVAILABLE_REPLY.to_string(),
        };
        self.messages.push(ChatMessage::system(content));
        self.reply.resolve(ticket, result.map(|_| ()))
    }
}
