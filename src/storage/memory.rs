//! In-memory preference store
//!
//! Clones share one map, so a fresh service built over a clone behaves like
//! the app after a restart.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;

use super::preferences::PreferenceStore;
use crate::error::BizbookResult;

/// Process-local preference store
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryPreferenceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with raw entries
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Arc::new(RwLock::new(map)),
        }
    }

    /// Raw value under `key`, without going through the async trait
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn get_item(&self, key: &str) -> BizbookResult<Option<String>> {
        Ok(self.raw(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> BizbookResult<()> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
