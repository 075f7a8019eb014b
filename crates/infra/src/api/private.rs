//! Organisation and project scoped endpoints
//!
//! Scoped calls take an explicit [`ScopeContext`]. The stored selection
//! (`CONVOY_ORG`, `CONVOY_PROJECT`) is only read through [`PrivateService::scope`]
//! and written through the `select_*` methods.

use std::sync::Arc;

use convoy_core::paths::{self, UrlLevel, AUTH_LOGOUT_PATH, ORGANISATIONS_PATH};
use convoy_core::session::{self, write_json};
use convoy_core::SessionStore;
use convoy_domain::constants::{SESSION_ORG_KEY, SESSION_PROJECT_KEY};
use convoy_domain::{
    App, AppsQuery, HttpResponse, Organisation, Paged, Project, ScopeContext, Source, SourcesQuery,
};
use tracing::{debug, info, instrument};

use super::auth::clear_token;
use super::client::{ApiClient, Credentials};
use super::errors::ApiError;

pub struct PrivateService {
    client: Arc<ApiClient>,
    store: Arc<dyn SessionStore>,
}

impl PrivateService {
    pub fn new(client: Arc<ApiClient>, store: Arc<dyn SessionStore>) -> Self {
        Self { client, store }
    }

    /// The organisation persisted by the last `select_organisation`.
    pub fn current_organisation(&self) -> Result<Option<Organisation>, ApiError> {
        Ok(session::current_organisation(self.store.as_ref())?)
    }

    /// Scope built from the stored organisation and project selection.
    pub fn scope(&self) -> Result<ScopeContext, ApiError> {
        Ok(session::resolve_scope(self.store.as_ref())?)
    }

    pub fn url_factory(&self, level: UrlLevel, scope: &ScopeContext) -> Result<String, ApiError> {
        Ok(paths::url_factory(level, scope)?)
    }

    #[instrument(skip(self))]
    pub async fn get_organisations(
        &self,
    ) -> Result<HttpResponse<Paged<Organisation>>, ApiError> {
        self.client.get(ORGANISATIONS_PATH, Credentials::Session).await
    }

    /// Persist `organisation` as the active one. Any project selection
    /// belonged to the previous organisation and is dropped.
    #[instrument(skip(self, organisation), fields(org = %organisation.uid))]
    pub fn select_organisation(&self, organisation: &Organisation) -> Result<ScopeContext, ApiError> {
        write_json(self.store.as_ref(), SESSION_ORG_KEY, organisation)?;
        self.store.remove(SESSION_PROJECT_KEY)?;
        info!("organisation selected");
        Ok(ScopeContext::from_organisation(Some(organisation)))
    }

    #[instrument(skip(self))]
    pub async fn get_project_details(
        &self,
        scope: &ScopeContext,
    ) -> Result<HttpResponse<Project>, ApiError> {
        let path = paths::project_path(scope)?;
        self.client.get(&path, Credentials::Session).await
    }

    /// Fetch `project_id` under `scope`'s organisation and make it the active
    /// project. Returns the project and the context derived from it.
    ///
    /// # Errors
    ///
    /// Returns error if the project cannot be fetched; the stored selection is
    /// left untouched in that case
    #[instrument(skip(self))]
    pub async fn select_project(
        &self,
        scope: &ScopeContext,
        project_id: &str,
    ) -> Result<(Project, ScopeContext), ApiError> {
        let candidate = scope.clone().with_project(project_id);
        let project = self.get_project_details(&candidate).await?.into_data()?;

        write_json(self.store.as_ref(), SESSION_PROJECT_KEY, &project.uid)?;
        debug!(project = %project.uid, "project selected");

        let next = scope.clone().with_project(project.uid.clone());
        Ok((project, next))
    }

    #[instrument(skip(self))]
    pub async fn get_apps(
        &self,
        scope: &ScopeContext,
        query: &AppsQuery,
    ) -> Result<HttpResponse<Paged<App>>, ApiError> {
        let path = paths::apps_path(scope, query)?;
        self.client.get(&path, Credentials::Session).await
    }

    #[instrument(skip(self))]
    pub async fn get_sources(
        &self,
        scope: &ScopeContext,
        query: &SourcesQuery,
    ) -> Result<HttpResponse<Paged<Source>>, ApiError> {
        let path = paths::sources_path(scope, query)?;
        self.client.get(&path, Credentials::Session).await
    }

    /// `POST /auth/logout` with an empty body, then forget the local token.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<HttpResponse<serde_json::Value>, ApiError> {
        let response = self
            .client
            .post::<serde_json::Value, _>(AUTH_LOGOUT_PATH, None, Credentials::Session)
            .await?;
        clear_token(self.store.as_ref())?;
        Ok(response)
    }
}
