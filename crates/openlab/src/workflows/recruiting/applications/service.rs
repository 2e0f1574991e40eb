use std::sync::Arc;

use chrono::Utc;

use super::super::domain::{application_token, Application};
use super::super::notices::{NoticeBoard, NoticeStore};
use super::super::screening::ScreeningClient;
use super::super::storage::StoreError;
use super::store::ApplicationStore;

/// Fields extracted from a student's multipart submission.
#[derive(Debug, Clone, Default)]
pub struct ApplyRequest {
    pub notice_id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub resume_filename: String,
    pub resume_text: String,
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("Missing required fields")]
    MissingFields,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Orchestrates a submission: resolve the notice, screen the resume against
/// its criteria, then persist through the deduplicating store.
pub struct ApplicationIntake<N, A> {
    board: Arc<NoticeBoard<N, A>>,
    applications: Arc<A>,
    screener: Arc<ScreeningClient>,
}

impl<N, A> ApplicationIntake<N, A>
where
    N: NoticeStore + 'static,
    A: ApplicationStore + 'static,
{
    pub fn new(
        board: Arc<NoticeBoard<N, A>>,
        applications: Arc<A>,
        screener: Arc<ScreeningClient>,
    ) -> Self {
        Self {
            board,
            applications,
            screener,
        }
    }

    /// Submit an application. Screening never blocks intake: the client
    /// guarantees a result via its fallback chain. Re-submission with the
    /// same `(notice, email, name)` returns the original record unchanged.
    pub async fn submit(&self, request: ApplyRequest) -> Result<Application, IntakeError> {
        let notice_id = request.notice_id.trim().to_string();
        let name = request.name.trim().to_string();
        let email = request.email.trim().to_string();
        if notice_id.is_empty() || name.is_empty() || email.is_empty() {
            return Err(IntakeError::MissingFields);
        }

        let notice = self.board.find(&notice_id);
        let (job_description, criteria) = match &notice {
            Some(notice) => (notice.description.clone(), notice.criteria.clone()),
            None => (String::new(), String::new()),
        };

        let screening = self
            .screener
            .screen(&request.resume_text, &job_description, &criteria)
            .await;

        let now = Utc::now();
        let application = Application {
            id: application_token(now.timestamp_millis()),
            notice_id,
            name,
            email,
            message: request.message.trim().to_string(),
            resume_filename: request.resume_filename,
            resume_content: request.resume_text,
            screening_result: Some(screening),
            created_at: now.to_rfc3339(),
        };

        Ok(self.applications.submit(application)?)
    }
}
