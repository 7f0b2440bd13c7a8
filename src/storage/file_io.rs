//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::io::ErrorKind;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::BizbookError;

/// Read JSON from a file, returning a default value if file doesn't exist
pub async fn read_json<T, P>(path: P) -> Result<T, BizbookError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let contents = match fs::read(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => {
            return Err(BizbookError::Storage(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    serde_json::from_slice(&contents)
        .map_err(|e| BizbookError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub async fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), BizbookError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await.map_err(|e| {
            BizbookError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let contents = serde_json::to_vec_pretty(data)
        .map_err(|e| BizbookError::Storage(format!("Failed to serialize data: {}", e)))?;

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let mut file = fs::File::create(&temp_path)
        .await
        .map_err(|e| BizbookError::Storage(format!("Failed to create temp file: {}", e)))?;

    file.write_all(&contents)
        .await
        .map_err(|e| BizbookError::Storage(format!("Failed to write data: {}", e)))?;

    file.flush()
        .await
        .map_err(|e| BizbookError::Storage(format!("Failed to flush data: {}", e)))?;

    file.sync_all()
        .await
        .map_err(|e| BizbookError::Storage(format!("Failed to sync data: {}", e)))?;

    drop(file);

    if let Err(e) = fs::rename(&temp_path, path).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(BizbookError::Storage(format!(
            "Failed to rename temp file: {}",
            e
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[tokio::test]
    async fn test_read_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let data: TestData = read_json(&path).await.unwrap();
        assert_eq!(data, TestData::default());
    }

    #[tokio::test]
    async fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        write_json_atomic(&path, &data).await.unwrap();
        let loaded: TestData = read_json(&path).await.unwrap();
        assert_eq!(data, loaded);
        assert!(!temp_dir.path().join("test.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        write_json_atomic(&path, &TestData::default()).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_read_invalid_json_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "not json at all").unwrap();

        let err = read_json::<TestData, _>(&path).await.unwrap_err();
        assert!(err.is_storage());
    }
}
