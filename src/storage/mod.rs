//! Storage layer for bizbook
//!
//! The `PreferenceStore` trait plus an in-memory and a JSON-file
//! implementation. The file store uses atomic writes and creates its
//! directory on demand.

pub mod file;
pub mod file_io;
pub mod memory;
pub mod preferences;

pub use file::FilePreferenceStore;
pub use file_io::{read_json, write_json_atomic};
pub use memory::MemoryPreferenceStore;
pub use preferences::{PreferenceStore, ACTIVE_MODULES_KEY, ONBOARDING_KEY};

use crate::config::paths::BizbookPaths;

/// Open the file-backed preference store under `paths`
pub fn open_preferences(paths: &BizbookPaths) -> FilePreferenceStore {
    FilePreferenceStore::new(paths.preferences_file())
}
