use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

use super::super::domain::{Application, DedupeKey};
use super::super::storage::{read_array, write_array, StoreError};

/// Storage abstraction over the application list.
pub trait ApplicationStore: Send + Sync {
    /// Idempotent insert: if an application with the same dedupe key exists,
    /// it is returned unchanged and nothing is written.
    fn submit(&self, application: Application) -> Result<Application, StoreError>;
    /// Full list after normalization, most recent first.
    fn list(&self) -> Vec<Application>;
    /// Applications for one notice, preserving store order.
    fn list_by_notice(&self, notice_id: &str) -> Vec<Application>;
    /// Cascade step for notice deletion; returns how many were removed.
    fn delete_by_notice(&self, notice_id: &str) -> Result<usize, StoreError>;
}

/// Prune duplicate dedupe keys, keeping the earliest submission. Unparseable
/// timestamps are treated as infinitely late, so they lose against any valid
/// timestamp; exact ties keep the first occurrence. Returns the surviving
/// list (original order) and whether anything was removed.
pub(crate) fn normalize_applications(list: Vec<Application>) -> (Vec<Application>, bool) {
    let mut earliest: HashMap<DedupeKey, (i64, usize)> = HashMap::new();

    for (index, application) in list.iter().enumerate() {
        let key = application.dedupe_key();
        let millis = application.created_at_millis().unwrap_or(i64::MAX);
        match earliest.get(&key) {
            Some(&(best_millis, _)) if millis >= best_millis => {}
            _ => {
                earliest.insert(key, (millis, index));
            }
        }
    }

    let keep: HashSet<usize> = earliest.values().map(|&(_, index)| index).collect();
    let pruned = keep.len() != list.len();
    let normalized = list
        .into_iter()
        .enumerate()
        .filter(|(index, _)| keep.contains(index))
        .map(|(_, application)| application)
        .collect();

    (normalized, pruned)
}

/// JSON-array file store for applications. The normalization pass runs on
/// every load, before any read is returned, and persists the pruned list
/// whenever it removed something.
pub struct JsonApplicationStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonApplicationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join("applications.json"))
    }

    /// Load + self-heal. Callers must hold the store lock. The healing write
    /// is best effort on read paths; a failed write leaves the duplicates on
    /// disk for the next pass.
    fn load_normalized(&self) -> Vec<Application> {
        let list: Vec<Application> = read_array(&self.path);
        let (normalized, pruned) = normalize_applications(list);
        if pruned {
            if let Err(err) = write_array(&self.path, &normalized) {
                warn!(path = %self.path.display(), error = %err, "failed to persist pruned applications");
            }
        }
        normalized
    }
}

impl ApplicationStore for JsonApplicationStore {
    fn submit(&self, application: Application) -> Result<Application, StoreError> {
        let _guard = self.lock.lock().expect("application store mutex poisoned");
        let list = self.load_normalized();

        let key = application.dedupe_key();
        if let Some(existing) = list.iter().find(|entry| entry.dedupe_key() == key) {
            return Ok(existing.clone());
        }

        let mut next = Vec::with_capacity(list.len() + 1);
        next.push(application.clone());
        next.extend(list.into_iter().filter(|entry| entry.id != application.id));

        write_array(&self.path, &next)?;
        Ok(application)
    }

    fn list(&self) -> Vec<Application> {
        let _guard = self.lock.lock().expect("application store mutex poisoned");
        self.load_normalized()
    }

    fn list_by_notice(&self, notice_id: &str) -> Vec<Application> {
        let notice_id = notice_id.trim();
        if notice_id.is_empty() {
            return Vec::new();
        }

        let _guard = self.lock.lock().expect("application store mutex poisoned");
        self.load_normalized()
            .into_iter()
            .filter(|application| application.notice_id.trim() == notice_id)
            .collect()
    }

    fn delete_by_notice(&self, notice_id: &str) -> Result<usize, StoreError> {
        let notice_id = notice_id.trim();
        if notice_id.is_empty() {
            return Ok(0);
        }

        let _guard = self.lock.lock().expect("application store mutex poisoned");
        let list = self.load_normalized();
        let before = list.len();

        let next: Vec<Application> = list
            .into_iter()
            .filter(|application| application.notice_id.trim() != notice_id)
            .collect();

        let removed = before - next.len();
        if removed > 0 {
            write_array(&self.path, &next)?;
        }
        Ok(removed)
    }
}
