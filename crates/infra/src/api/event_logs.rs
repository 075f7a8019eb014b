//! Event and event delivery listings
//!
//! Both listings accept a portal token. With a token the path is unscoped and
//! the token replaces the session's bearer token.

use std::sync::Arc;

use convoy_core::paths::{event_deliveries_path, events_path};
use convoy_domain::{
    Event, EventDeliveriesQuery, EventDelivery, EventsQuery, HttpResponse, Paged, ScopeContext,
};
use tracing::instrument;

use super::client::{ApiClient, Credentials};
use super::errors::ApiError;

pub struct EventLogsService {
    client: Arc<ApiClient>,
}

impl EventLogsService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    #[instrument(skip(self, query), fields(page = query.page_no, portal = query.token.is_some()))]
    pub async fn get_events(
        &self,
        scope: &ScopeContext,
        query: &EventsQuery,
    ) -> Result<HttpResponse<Paged<Event>>, ApiError> {
        let path = events_path(scope, query)?;
        self.client.get(&path, Credentials::with_override(query.token.as_deref())).await
    }

    #[instrument(
        skip(self, query),
        fields(event = %query.event_id, page = query.page_no, portal = query.token.is_some())
    )]
    pub async fn get_event_deliveries(
        &self,
        scope: &ScopeContext,
        query: &EventDeliveriesQuery,
    ) -> Result<HttpResponse<Paged<EventDelivery>>, ApiError> {
        let path = event_deliveries_path(scope, query)?;
        self.client.get(&path, Credentials::with_override(query.token.as_deref())).await
    }
}
