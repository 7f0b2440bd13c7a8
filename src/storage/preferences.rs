//! Preference store abstraction
//!
//! A small async key-value store holding text-serialized values, in the shape
//! mobile platforms expose for app preferences.

use async_trait::async_trait;

use crate::error::BizbookResult;

/// Key holding the JSON array of enabled module ids
pub const ACTIVE_MODULES_KEY: &str = "activeModules";

/// Key holding the JSON boolean onboarding flag
pub const ONBOARDING_KEY: &str = "hasCompletedOnboarding";

/// Durable string-keyed storage that survives process restarts
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read the raw value stored under `key`, `None` when absent
    async fn get_item(&self, key: &str) -> BizbookResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set_item(&self, key: &str, value: &str) -> BizbookResult<()>;
}
