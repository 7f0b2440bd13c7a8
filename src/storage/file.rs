//! File-backed preference store
//!
//! All entries live in one JSON object (`preferences.json`) mapping each key
//! to its text-serialized value. Every write rewrites the file atomically.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::warn;

use super::file_io::{read_json, write_json_atomic};
use super::preferences::PreferenceStore;
use crate::error::BizbookResult;

type PreferenceMap = BTreeMap<String, String>;

/// Preference store persisted to a single JSON file
pub struct FilePreferenceStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles
    write_lock: Mutex<()>,
}

impl FilePreferenceStore {
    /// Create a store backed by `path`; the file is created on first write
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the map for a write, starting over when the file is unreadable
    async fn load_for_update(&self) -> PreferenceMap {
        match read_json::<PreferenceMap, _>(&self.path).await {
            Ok(map) => map,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "discarding unreadable preference file");
                PreferenceMap::new()
            }
        }
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn get_item(&self, key: &str) -> BizbookResult<Option<String>> {
        let map: PreferenceMap = read_json(&self.path).await?;
        Ok(map.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> BizbookResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.load_for_update().await;
        map.insert(key.to_string(), value.to_string());
        write_json_atomic(&self.path, &map).await
    }
}
