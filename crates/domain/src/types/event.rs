//! Events and event deliveries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An event received by a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub uid: String,
    #[serde(default)]
    pub event_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(default)]
    pub endpoints: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// State of a delivery attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Scheduled,
    Processing,
    Discarded,
    Failure,
    Success,
    Retry,
}

crate::impl_domain_status_conversions!(DeliveryStatus {
    Scheduled => "Scheduled",
    Processing => "Processing",
    Discarded => "Discarded",
    Failure => "Failure",
    Success => "Success",
    Retry => "Retry",
});

/// Retry bookkeeping attached to a delivery
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryMetadata {
    pub num_trials: u32,
    pub retry_limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_send_time: Option<DateTime<Utc>>,
}

/// A record of an attempt to deliver an event to an endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDelivery {
    pub uid: String,
    pub event_id: String,
    #[serde(default)]
    pub endpoint_id: String,
    pub status: DeliveryStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub metadata: DeliveryMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
