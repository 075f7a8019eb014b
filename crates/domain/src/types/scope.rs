//! Explicit organisation/project scope
//!
//! Passed into every scoped service call instead of being read from shared
//! state. A project-detail fetch returns the project; callers derive the next
//! context with [`ScopeContext::with_project`].

use serde::{Deserialize, Serialize};

use crate::errors::{ConvoyError, Result};
use crate::types::organisation::Organisation;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeContext {
    organisation_id: Option<String>,
    project_id: Option<String>,
}

impl ScopeContext {
    /// Context with neither organisation nor project.
    pub fn unscoped() -> Self {
        Self::default()
    }

    pub fn new(organisation_id: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self::for_organisation(organisation_id).with_project(project_id)
    }

    pub fn for_organisation(organisation_id: impl Into<String>) -> Self {
        Self { organisation_id: non_empty(organisation_id.into()), project_id: None }
    }

    /// Build from a stored organisation record, if any.
    pub fn from_organisation(organisation: Option<&Organisation>) -> Self {
        Self {
            organisation_id: organisation.and_then(|org| non_empty(org.uid.clone())),
            project_id: None,
        }
    }

    #[must_use]
    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = non_empty(project_id.into());
        self
    }

    /// Organisation id, or `MissingOrganisation`.
    pub fn organisation_id(&self) -> Result<&str> {
        self.organisation_id.as_deref().ok_or(ConvoyError::MissingOrganisation)
    }

    /// Active project id, or `MissingProject`.
    pub fn project_id(&self) -> Result<&str> {
        self.project_id.as_deref().ok_or(ConvoyError::MissingProject)
    }

    pub fn has_project(&self) -> bool {
        self.project_id.is_some()
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscoped_context_reports_missing_ids() {
        let ctx = ScopeContext::unscoped();
        assert_eq!(ctx.organisation_id(), Err(ConvoyError::MissingOrganisation));
        assert_eq!(ctx.project_id(), Err(ConvoyError::MissingProject));
    }

    #[test]
    fn test_blank_ids_count_as_missing() {
        let ctx = ScopeContext::new("  ", "");
        assert!(ctx.organisation_id().is_err());
        assert!(!ctx.has_project());
    }

    #[test]
    fn test_with_project_replaces_previous_project() {
        let ctx = ScopeContext::new("org-1", "proj-1").with_project("proj-2");
        assert_eq!(ctx.organisation_id(), Ok("org-1"));
        assert_eq!(ctx.project_id(), Ok("proj-2"));
    }

    #[test]
    fn test_from_stored_organisation() {
        let org = Organisation {
            uid: "org-9".into(),
            name: "Acme".into(),
            owner_id: None,
            custom_domain: None,
            created_at: None,
            updated_at: None,
        };
        assert_eq!(ScopeContext::from_organisation(Some(&org)).organisation_id(), Ok("org-9"));
        assert!(ScopeContext::from_organisation(None).organisation_id().is_err());
    }
}
