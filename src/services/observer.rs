//! Diagnostics hook for best-effort persistence
//!
//! Storage problems never reach callers of the module-activation service.
//! They are handed to a `PersistenceObserver` instead; the default one logs
//! through `tracing`.

use tracing::{debug, error, warn};

use crate::error::BizbookError;
use crate::models::ModulesSnapshot;

/// Receives storage events the service recovers from on its own
pub trait PersistenceObserver: Send + Sync {
    /// A stored value was malformed or unreadable; the default was used
    fn load_fallback(&self, key: &'static str, error: &BizbookError) {
        warn!(key, error = %error, "falling back to default preference value");
    }

    /// Writing one entry of the snapshot failed; in-memory state is unchanged
    fn persist_failed(&self, key: &'static str, error: &BizbookError) {
        error!(key, error = %error, "failed to persist preference");
    }

    /// A snapshot reached the store
    fn persisted(&self, snapshot: &ModulesSnapshot) {
        debug!(
            modules = snapshot.active_modules.len(),
            onboarded = snapshot.has_completed_onboarding,
            "preferences persisted"
        );
    }
}

/// Observer that only logs
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PersistenceObserver for TracingObserver {}
