//! Query parameters for the listing endpoints
//!
//! These are plain data; path rendering lives in `convoy-core::paths`.

use serde::{Deserialize, Serialize};

use super::event::DeliveryStatus;

/// Filters for `GET .../events`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsQuery {
    pub page_no: u32,
    pub start_date: String,
    pub end_date: String,
    pub endpoint_id: String,
    pub query: Option<String>,
    /// Portal token; when set the request is unscoped and uses this bearer.
    pub token: Option<String>,
    pub source_id: Option<String>,
}

/// Filters for `GET .../eventdeliveries`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDeliveriesQuery {
    pub page_no: u32,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub endpoint_id: Option<String>,
    pub event_id: String,
    pub statuses: Vec<DeliveryStatus>,
    pub token: Option<String>,
    pub source_id: Option<String>,
}

/// Filters for `GET .../apps`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppsQuery {
    pub page_no: Option<u32>,
    pub search_string: Option<String>,
}

/// Filters for `GET .../sources`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcesQuery {
    pub page: Option<u32>,
}

/// Scoping for `GET organizations`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganisationsQuery {
    pub user_id: Option<String>,
}
