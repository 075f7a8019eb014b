//! Port interface for session persistence

use convoy_domain::Result;

/// Synchronous key/value store for client session state
///
/// Implementations must be safe to share between tasks.
pub trait SessionStore: Send + Sync {
    /// Get the raw value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}
