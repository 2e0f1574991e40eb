use std::sync::Arc;

use chrono::Utc;

use crate::auth::session::Identity;

use super::super::applications::ApplicationStore;
use super::super::domain::{notice_token, Application, Notice, NoticeStatus};
use super::super::merge::merge_notice_sources;
use super::super::seed::seed_notices;
use super::super::storage::StoreError;
use super::store::NoticeStore;

/// Fields a lab submits when posting a notice.
#[derive(Debug, Clone, Default)]
pub struct NoticeDraft {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub deadline: String,
    pub status: Option<NoticeStatus>,
    pub criteria: String,
    pub roles: Vec<String>,
}

/// Error raised by the notice board service.
#[derive(Debug, thiserror::Error)]
pub enum NoticeBoardError {
    #[error("Missing required fields")]
    MissingFields,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Composes the posted-notice store, the application store (for cascade
/// deletes and applicant listings), and the static seed listings.
pub struct NoticeBoard<N, A> {
    notices: Arc<N>,
    applications: Arc<A>,
    seed: Vec<Notice>,
}

impl<N, A> NoticeBoard<N, A>
where
    N: NoticeStore + 'static,
    A: ApplicationStore + 'static,
{
    pub fn new(notices: Arc<N>, applications: Arc<A>) -> Self {
        Self::with_seed(notices, applications, seed_notices())
    }

    pub fn with_seed(notices: Arc<N>, applications: Arc<A>, seed: Vec<Notice>) -> Self {
        Self {
            notices,
            applications,
            seed,
        }
    }

    /// Merged listing: posted notices first (most recent first), then seed,
    /// deduplicated by id with first occurrence winning.
    pub fn list(&self) -> Vec<Notice> {
        let posted = self.notices.list();
        merge_notice_sources(&[&posted, &self.seed])
    }

    pub fn find(&self, id: &str) -> Option<Notice> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }
        self.list().into_iter().find(|notice| notice.id == id)
    }

    /// Create a notice from a draft. Ownership comes from the session when it
    /// is acting as a lab; otherwise the notice is anonymous and read-only.
    pub fn post(
        &self,
        draft: NoticeDraft,
        session: Option<&Identity>,
    ) -> Result<Notice, NoticeBoardError> {
        if draft.title.trim().is_empty() || draft.description.trim().is_empty() {
            return Err(NoticeBoardError::MissingFields);
        }

        let lab = session.and_then(Identity::lab_profile);
        let now = Utc::now();
        let id = draft
            .id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| notice_token(now.timestamp_millis()));

        let notice = Notice {
            id,
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            duration: draft.duration.trim().to_string(),
            deadline: draft.deadline.trim().to_string(),
            status: draft.status.unwrap_or_default(),
            criteria: draft.criteria.trim().to_string(),
            roles: draft.roles,
            lab_name: lab.map(|profile| profile.lab_name.clone()).unwrap_or_default(),
            owner_email: lab.map(|profile| profile.email.trim().to_string()).unwrap_or_default(),
            created_at: now.to_rfc3339(),
        };

        Ok(self.notices.upsert(notice)?)
    }

    /// Owner-scoped status change. `Ok(false)` both when the session is not a
    /// lab and when no notice matches id+owner, so callers can't probe for
    /// existence.
    pub fn set_status(
        &self,
        id: &str,
        session: &Identity,
        status: NoticeStatus,
    ) -> Result<bool, StoreError> {
        let Some(profile) = session.lab_profile() else {
            return Ok(false);
        };
        self.notices.update_status(id, &profile.email, status)
    }

    /// Owner-scoped delete. On success, removes every application referencing
    /// the notice as an atomic follow-up.
    pub fn remove(&self, id: &str, session: &Identity) -> Result<bool, StoreError> {
        let Some(profile) = session.lab_profile() else {
            return Ok(false);
        };
        if !self.notices.delete(id, &profile.email)? {
            return Ok(false);
        }
        self.applications.delete_by_notice(id)?;
        Ok(true)
    }

    /// Applications submitted against one notice, most recent first.
    pub fn applications_for(&self, notice_id: &str) -> Vec<Application> {
        self.applications.list_by_notice(notice_id)
    }
}
