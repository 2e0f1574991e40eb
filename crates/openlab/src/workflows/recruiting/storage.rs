use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Errors raised by the JSON-file stores. Reads fail open to an empty list;
/// only writes surface here.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("store serialization failure: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Read a JSON array file. A missing file, unreadable file, or malformed
/// payload all yield an empty list.
pub(crate) fn read_array<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(_) => return Vec::new(),
    };

    match serde_json::from_slice::<Vec<T>>(&raw) {
        Ok(list) => list,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "discarding malformed store file");
            Vec::new()
        }
    }
}

/// Replace a JSON array file wholesale, creating parent directories on first
/// write.
pub(crate) fn write_array<T: Serialize>(path: &Path, list: &[T]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let raw = serde_json::to_vec_pretty(list)?;
    fs::write(path, raw)?;
    Ok(())
}
