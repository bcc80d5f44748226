use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tracing::debug;

use super::{ApplicationStore, StoreError};

/// File-backed store: the whole collection lives in one file as a top-level
/// JSON array, pretty-printed, and is rewritten in full on every append.
///
/// Appends are not serialized against concurrent callers. Two overlapping
/// appends can interleave their read-modify-write cycles, in which case the
/// later write wins and the earlier record is lost.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the current collection. A file that is missing or blank is an
    /// empty collection, not an error; content that is present but cannot be
    /// parsed as a JSON array is.
    async fn load(&self) -> Result<Vec<Value>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(e)),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        match serde_json::from_slice::<Value>(&bytes)? {
            Value::Array(records) => Ok(records),
            _ => Err(StoreError::NotAnArray),
        }
    }
}

#[async_trait]
impl ApplicationStore for JsonFileStore {
    async fn append(&self, record: Value) -> Result<(), StoreError> {
        let mut records = self.load().await?;
        records.push(record);

        let body = serde_json::to_vec_pretty(&records)?;
        fs::write(&self.path, body).await?;

        debug!("store now holds {} records", records.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn record(name: &str) -> Value {
        json!({
            "name": name,
            "email": format!("{}@example.com", name.to_lowercase()),
            "phone": "123",
            "dob": "2000-01-01",
            "address": "X",
            "position": "Clerk",
        })
    }

    #[tokio::test]
    async fn test_first_append_creates_file_with_one_element_array() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data.json"));

        store.append(record("A")).await.unwrap();

        let contents = tokio::fs::read_to_string(store.path()).await.unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, vec![record("A")]);
    }

    #[tokio::test]
    async fn test_blank_file_treated_as_empty_collection() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        tokio::fs::write(&path, "  \n").await.unwrap();

        let store = JsonFileStore::new(&path);
        store.append(record("A")).await.unwrap();

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[tokio::test]
    async fn test_sequential_appends_preserve_submission_order() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data.json"));

        for name in ["A", "B", "C"] {
            store.append(record(name)).await.unwrap();
        }

        let contents = tokio::fs::read_to_string(store.path()).await.unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, vec![record("A"), record("B"), record("C")]);
    }

    #[tokio::test]
    async fn test_duplicate_records_are_both_kept() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data.json"));

        store.append(record("A")).await.unwrap();
        store.append(record("A")).await.unwrap();

        let contents = tokio::fs::read_to_string(store.path()).await.unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, vec![record("A"), record("A")]);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error_not_an_empty_collection() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        let store = JsonFileStore::new(&path);
        let err = store.append(record("A")).await.unwrap_err();
        assert!(matches!(err, StoreError::Malformed(_)));

        // The corrupted content must not have been overwritten.
        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(contents, "{ not json");
    }

    #[tokio::test]
    async fn test_non_array_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        tokio::fs::write(&path, r#"{"name": "A"}"#).await.unwrap();

        let store = JsonFileStore::new(&path);
        let err = store.append(record("A")).await.unwrap_err();
        assert!(matches!(err, StoreError::NotAnArray));
    }

    #[tokio::test]
    async fn test_file_is_pretty_printed_with_two_space_indent() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data.json"));

        store.append(record("A")).await.unwrap();

        let contents = tokio::fs::read_to_string(store.path()).await.unwrap();
        assert!(contents.starts_with("[\n  {"), "got: {contents}");
    }
}
