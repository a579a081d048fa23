//! Emergency resource models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::DisasterType;

/// An allocatable emergency resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub count: u32,
    pub location: String,
    pub estimated_arrival_time: String,
    pub status: ResourceStatus,
}

/// Deployment status of a resource
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceStatus {
    #[default]
    Available,
    EnRoute,
    Deployed,
}

impl std::fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceStatus::Available => write!(f, "available"),
            ResourceStatus::EnRoute => write!(f, "en-route"),
            ResourceStatus::Deployed => write!(f, "deployed"),
        }
    }
}

/// Query string of `GET /api/resources`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceQuery {
    pub disaster_type: Option<String>,
    pub location: Option<String>,
}

/// Response of `GET /api/resources`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceResponse {
    pub disaster_type: DisasterType,
    pub location: String,
    pub allocated_resources: Vec<Resource>,
    pub timestamp: DateTime<Utc>,
}
