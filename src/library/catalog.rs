//! Metadata files: the JSON lists the generator writes and the loader reads.
//!
//! Files are pretty-printed arrays so they stay readable and hand-editable.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;

use super::generator::GenerateError;

/// Write a list as pretty JSON, creating the parent directory
pub async fn write_catalog<T: Serialize>(path: &Path, entries: &[T]) -> Result<(), GenerateError> {
    let content = serde_json::to_string_pretty(entries)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|source| GenerateError::WriteFailure {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    fs::write(path, content)
        .await
        .map_err(|source| GenerateError::WriteFailure {
            path: path.to_path_buf(),
            source,
        })
}

/// Parse a metadata body into a list
pub fn parse_catalog<T: DeserializeOwned>(bytes: &[u8]) -> serde_json::Result<Vec<T>> {
    serde_json::from_slice(bytes)
}
