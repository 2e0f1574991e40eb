use std::sync::{Arc, Mutex};

use crate::auth::session::{Identity, Profile};
use crate::workflows::recruiting::applications::{
    ApplicationIntake, ApplicationStore, JsonApplicationStore,
};
use crate::workflows::recruiting::domain::{Application, Notice, NoticeStatus};
use crate::workflows::recruiting::notices::{
    JsonNoticeStore, NoticeBoard, NoticeDraft, NoticeStore,
};
use crate::workflows::recruiting::screening::ScreeningClient;
use crate::workflows::recruiting::storage::StoreError;

pub(super) fn lab_identity(email: &str) -> Identity {
    Identity::Lab {
        profile: Profile {
            email: email.to_string(),
            name: "Prof. Lee".to_string(),
            lab_name: "Vision Lab".to_string(),
        },
    }
}

pub(super) fn student_identity(email: &str) -> Identity {
    Identity::Student {
        profile: Profile {
            email: email.to_string(),
            name: "Sam".to_string(),
            lab_name: String::new(),
        },
    }
}

pub(super) fn draft(title: &str) -> NoticeDraft {
    NoticeDraft {
        id: None,
        title: title.to_string(),
        description: format!("{title} description"),
        duration: "2 weeks".to_string(),
        deadline: "2026-09-01".to_string(),
        status: None,
        criteria: "Python, SQL".to_string(),
        roles: vec!["research assistant".to_string()],
    }
}

pub(super) fn application(
    id: &str,
    notice_id: &str,
    email: &str,
    name: &str,
    created_at: &str,
) -> Application {
    Application {
        id: id.to_string(),
        notice_id: notice_id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        message: String::new(),
        resume_filename: "resume.txt".to_string(),
        resume_content: "I know python and sql well".to_string(),
        screening_result: None,
        created_at: created_at.to_string(),
    }
}

/// File-backed board over a temp directory; exercises the real stores.
pub(super) fn file_backed_board(
    dir: &std::path::Path,
) -> (
    Arc<NoticeBoard<JsonNoticeStore, JsonApplicationStore>>,
    Arc<JsonNoticeStore>,
    Arc<JsonApplicationStore>,
) {
    let notices = Arc::new(JsonNoticeStore::in_dir(dir));
    let applications = Arc::new(JsonApplicationStore::in_dir(dir));
    let board = Arc::new(NoticeBoard::new(notices.clone(), applications.clone()));
    (board, notices, applications)
}

pub(super) fn memory_board() -> (
    Arc<NoticeBoard<MemoryNoticeStore, MemoryApplicationStore>>,
    Arc<MemoryNoticeStore>,
    Arc<MemoryApplicationStore>,
) {
    let notices = Arc::new(MemoryNoticeStore::default());
    let applications = Arc::new(MemoryApplicationStore::default());
    let board = Arc::new(NoticeBoard::new(notices.clone(), applications.clone()));
    (board, notices, applications)
}

pub(super) fn memory_intake(
    board: Arc<NoticeBoard<MemoryNoticeStore, MemoryApplicationStore>>,
    applications: Arc<MemoryApplicationStore>,
) -> Arc<ApplicationIntake<MemoryNoticeStore, MemoryApplicationStore>> {
    Arc::new(ApplicationIntake::new(
        board,
        applications,
        Arc::new(ScreeningClient::local(0.5)),
    ))
}

/// In-memory notice store mirroring the JSON store's semantics.
#[derive(Default)]
pub(super) struct MemoryNoticeStore {
    notices: Mutex<Vec<Notice>>,
}

impl NoticeStore for MemoryNoticeStore {
    fn list(&self) -> Vec<Notice> {
        self.notices.lock().expect("notice mutex poisoned").clone()
    }

    fn upsert(&self, notice: Notice) -> Result<Notice, StoreError> {
        let mut guard = self.notices.lock().expect("notice mutex poisoned");
        guard.retain(|entry| entry.id != notice.id);
        guard.insert(0, notice.clone());
        Ok(notice)
    }

    fn update_status(
        &self,
        id: &str,
        owner_email: &str,
        status: NoticeStatus,
    ) -> Result<bool, StoreError> {
        if id.trim().is_empty() || owner_email.trim().is_empty() {
            return Ok(false);
        }
        let mut guard = self.notices.lock().expect("notice mutex poisoned");
        match guard
            .iter_mut()
            .find(|entry| entry.id == id && entry.is_owned_by(owner_email))
        {
            Some(entry) => {
                entry.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&self, id: &str, owner_email: &str) -> Result<bool, StoreError> {
        if id.trim().is_empty() || owner_email.trim().is_empty() {
            return Ok(false);
        }
        let mut guard = self.notices.lock().expect("notice mutex poisoned");
        let before = guard.len();
        guard.retain(|entry| !(entry.id == id && entry.is_owned_by(owner_email)));
        Ok(guard.len() != before)
    }
}

/// In-memory application store with the same dedupe-on-submit behavior.
#[derive(Default)]
pub(super) struct MemoryApplicationStore {
    applications: Mutex<Vec<Application>>,
}

impl ApplicationStore for MemoryApplicationStore {
    fn submit(&self, application: Application) -> Result<Application, StoreError> {
        let mut guard = self.applications.lock().expect("application mutex poisoned");
        let key = application.dedupe_key();
        if let Some(existing) = guard.iter().find(|entry| entry.dedupe_key() == key) {
            return Ok(existing.clone());
        }
        guard.insert(0, application.clone());
        Ok(application)
    }

    fn list(&self) -> Vec<Application> {
        self.applications
            .lock()
            .expect("application mutex poisoned")
            .clone()
    }

    fn list_by_notice(&self, notice_id: &str) -> Vec<Application> {
        self.applications
            .lock()
            .expect("application mutex poisoned")
            .iter()
            .filter(|entry| entry.notice_id.trim() == notice_id.trim())
            .cloned()
            .collect()
    }

    fn delete_by_notice(&self, notice_id: &str) -> Result<usize, StoreError> {
        let mut guard = self.applications.lock().expect("application mutex poisoned");
        let before = guard.len();
        guard.retain(|entry| entry.notice_id.trim() != notice_id.trim());
        Ok(before - guard.len())
    }
}
