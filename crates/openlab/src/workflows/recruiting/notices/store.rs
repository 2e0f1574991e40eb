use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::super::domain::{Notice, NoticeStatus};
use super::super::storage::{read_array, write_array, StoreError};

/// Storage abstraction over the posted-notice list so services and tests can
/// swap backends.
pub trait NoticeStore: Send + Sync {
    /// Full posted list, most recently created first.
    fn list(&self) -> Vec<Notice>;
    /// Insert at the head, replacing any existing entry with the same id.
    fn upsert(&self, notice: Notice) -> Result<Notice, StoreError>;
    /// Owner-scoped conditional update; `Ok(false)` when id+owner don't match.
    fn update_status(
        &self,
        id: &str,
        owner_email: &str,
        status: NoticeStatus,
    ) -> Result<bool, StoreError>;
    /// Owner-scoped delete; `Ok(false)` when id+owner don't match. Cascading
    /// application cleanup is the caller's follow-up.
    fn delete(&self, id: &str, owner_email: &str) -> Result<bool, StoreError>;
}

/// JSON-array file store for posted notices. Every mutation is a full
/// read-modify-write cycle under the store lock.
pub struct JsonNoticeStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonNoticeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join("posted-notices.json"))
    }
}

impl NoticeStore for JsonNoticeStore {
    fn list(&self) -> Vec<Notice> {
        let _guard = self.lock.lock().expect("notice store mutex poisoned");
        read_array(&self.path)
    }

    fn upsert(&self, notice: Notice) -> Result<Notice, StoreError> {
        let _guard = self.lock.lock().expect("notice store mutex poisoned");
        let list: Vec<Notice> = read_array(&self.path);

        let mut next = Vec::with_capacity(list.len() + 1);
        next.push(notice.clone());
        next.extend(list.into_iter().filter(|entry| entry.id != notice.id));

        write_array(&self.path, &next)?;
        Ok(notice)
    }

    fn update_status(
        &self,
        id: &str,
        owner_email: &str,
        status: NoticeStatus,
    ) -> Result<bool, StoreError> {
        let id = id.trim();
        if id.is_empty() || owner_email.trim().is_empty() {
            return Ok(false);
        }

        let _guard = self.lock.lock().expect("notice store mutex poisoned");
        let mut list: Vec<Notice> = read_array(&self.path);

        let Some(entry) = list
            .iter_mut()
            .find(|notice| notice.id == id && notice.is_owned_by(owner_email))
        else {
            return Ok(false);
        };

        entry.status = status;
        write_array(&self.path, &list)?;
        Ok(true)
    }

    fn delete(&self, id: &str, owner_email: &str) -> Result<bool, StoreError> {
        let id = id.trim();
        if id.is_empty() || owner_email.trim().is_empty() {
            return Ok(false);
        }

        let _guard = self.lock.lock().expect("notice store mutex poisoned");
        let list: Vec<Notice> = read_array(&self.path);

        let next: Vec<Notice> = list
            .iter()
            .filter(|notice| !(notice.id == id && notice.is_owned_by(owner_email)))
            .cloned()
            .collect();

        if next.len() == list.len() {
            return Ok(false);
        }

        write_array(&self.path, &next)?;
        Ok(true)
    }
}
