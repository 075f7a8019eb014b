//! URL construction for the dashboard endpoints
//!
//! Paths are relative to the configured API base URL. Scoped paths are built
//! from an explicit [`ScopeContext`] and fail instead of producing a
//! malformed segment when an id is missing.

use convoy_domain::constants::{DEFAULT_PAGE, DEFAULT_PER_PAGE, DEFAULT_SORT};
use convoy_domain::{
    AppsQuery, EventDeliveriesQuery, EventsQuery, OrganisationsQuery, Result, ScopeContext,
    SourcesQuery,
};
use urlencoding::encode;

pub const LOGIN_PATH: &str = "login";
pub const LOGOUT_PATH: &str = "logout";
pub const AUTH_LOGOUT_PATH: &str = "/auth/logout";
pub const ORGANIZATIONS_PATH: &str = "organizations";
pub const ORGANISATIONS_PATH: &str = "/organisations";

/// How deep a scoped URL reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlLevel {
    /// `/organisations/{org}`
    Org,
    /// `/organisations/{org}/groups/{project}`
    OrgProject,
}

/// Build the scope prefix for `level`.
///
/// # Errors
/// `MissingOrganisation` when no organisation is set; `MissingProject` when
/// `OrgProject` is requested without an active project.
pub fn url_factory(level: UrlLevel, scope: &ScopeContext) -> Result<String> {
    let org = format!("{ORGANISATIONS_PATH}/{}", encode(scope.organisation_id()?));
    match level {
        UrlLevel::Org => Ok(org),
        UrlLevel::OrgProject => Ok(format!("{org}/groups/{}", encode(scope.project_id()?))),
    }
}

/// `organizations`, with the caller's scoping query appended verbatim.
pub fn organizations_path(query: &OrganisationsQuery) -> String {
    match query.user_id.as_deref().filter(|s| !s.is_empty()) {
        Some(scoping) => format!("{ORGANIZATIONS_PATH}?{scoping}"),
        None => ORGANIZATIONS_PATH.to_string(),
    }
}

/// Project detail: `{org}/groups/{project}`.
pub fn project_path(scope: &ScopeContext) -> Result<String> {
    url_factory(UrlLevel::OrgProject, scope)
}

pub fn apps_path(scope: &ScopeContext, query: &AppsQuery) -> Result<String> {
    let mut qs = QueryString::new();
    qs.push("sort", DEFAULT_SORT)
        .push("page", query.page_no.unwrap_or(DEFAULT_PAGE))
        .push("perPage", DEFAULT_PER_PAGE);
    if let Some(search) = query.search_string.as_deref().filter(|s| !s.is_empty()) {
        qs.push("q", search);
    }

    Ok(format!("{}/apps{}", url_factory(UrlLevel::OrgProject, scope)?, qs.finish()))
}

pub fn sources_path(scope: &ScopeContext, query: &SourcesQuery) -> Result<String> {
    let prefix = url_factory(UrlLevel::OrgProject, scope)?;
    let mut qs = QueryString::new();
    qs.push("groupId", scope.project_id()?).push("page", query.page.unwrap_or(DEFAULT_PAGE));

    Ok(format!("{prefix}/sources{}", qs.finish()))
}

/// Event listing. A portal token makes the path unscoped.
pub fn events_path(scope: &ScopeContext, query: &EventsQuery) -> Result<String> {
    let prefix = token_prefix(scope, query.token.as_deref())?;
    let mut qs = QueryString::new();
    qs.push("sort", DEFAULT_SORT)
        .push("page", query.page_no)
        .push("perPage", DEFAULT_PER_PAGE)
        .push("startDate", &query.start_date)
        .push("endDate", &query.end_date)
        .push("endpointId", &query.endpoint_id)
        .push("query", query.query.as_deref().unwrap_or_default())
        .push("sourceId", query.source_id.as_deref().unwrap_or_default());

    Ok(format!("{prefix}/events{}", qs.finish()))
}

/// Delivery listing; one `status` pair per requested status.
pub fn event_deliveries_path(scope: &ScopeContext, query: &EventDeliveriesQuery) -> Result<String> {
    let prefix = token_prefix(scope, query.token.as_deref())?;
    let mut qs = QueryString::new();
    qs.push("eventId", &query.event_id)
        .push("page", query.page_no)
        .push("startDate", query.start_date.as_deref().unwrap_or_default())
        .push("endDate", query.end_date.as_deref().unwrap_or_default())
        .push("endpointId", query.endpoint_id.as_deref().unwrap_or_default());
    for status in &query.statuses {
        qs.push("status", status);
    }
    qs.push("sourceId", query.source_id.as_deref().unwrap_or_default());

    Ok(format!("{prefix}/eventdeliveries{}", qs.finish()))
}

fn token_prefix(scope: &ScopeContext, token: Option<&str>) -> Result<String> {
    match token {
        Some(token) if !token.is_empty() => Ok(String::new()),
        _ => url_factory(UrlLevel::OrgProject, scope),
    }
}

/// Ordered `key=value` pairs; values are percent-encoded.
struct QueryString {
    pairs: Vec<String>,
}

impl QueryString {
    const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    fn push(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.pairs.push(format!("{key}={}", encode(&value.to_string())));
        self
    }

    fn finish(&self) -> String {
        if self.pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", self.pairs.join("&"))
        }
    }
}
