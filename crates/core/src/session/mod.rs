//! Client-side session state
//!
//! Replaces browser localStorage with a [`SessionStore`] port. Values are
//! stored as JSON strings under the `CONVOY_*` keys and parsed on every read.

pub mod ports;

use convoy_domain::constants::{SESSION_ORG_KEY, SESSION_PROJECT_KEY};
use convoy_domain::{ConvoyError, Organisation, Result, ScopeContext};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use ports::SessionStore;

/// Read and parse a JSON value stored under `key`.
///
/// # Errors
/// Returns `ConvoyError::Session` if the store fails or the value is not
/// valid JSON for `T`.
pub fn read_json<T: DeserializeOwned>(store: &dyn SessionStore, key: &str) -> Result<Option<T>> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| ConvoyError::Session(format!("Invalid value stored under {key}: {e}")))
}

/// Serialize `value` and store it under `key`.
///
/// # Errors
/// Returns `ConvoyError::Session` if serialization or the store fails.
pub fn write_json<T: Serialize>(store: &dyn SessionStore, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)
        .map_err(|e| ConvoyError::Session(format!("Failed to serialize {key}: {e}")))?;
    store.set(key, &raw)
}

/// The organisation persisted under `CONVOY_ORG`, if any.
pub fn current_organisation(store: &dyn SessionStore) -> Result<Option<Organisation>> {
    read_json(store, SESSION_ORG_KEY)
}

/// Build a scope from the stored organisation and project selection.
pub fn resolve_scope(store: &dyn SessionStore) -> Result<ScopeContext> {
    let organisation = current_organisation(store)?;
    let scope = ScopeContext::from_organisation(organisation.as_ref());

    match read_json::<String>(store, SESSION_PROJECT_KEY)? {
        Some(project_id) => Ok(scope.with_project(project_id)),
        None => Ok(scope),
    }
}
