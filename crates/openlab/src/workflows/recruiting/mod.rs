//! Recruiting marketplace core: the notice board, application intake, and
//! resume screening with its fallback chain.

pub mod applications;
pub mod domain;
pub mod merge;
pub mod notices;
pub mod screening;
pub mod seed;
pub mod storage;

#[cfg(test)]
mod tests;

pub use applications::{
    application_router, ApplicationIntake, ApplicationStore, ApplyRequest, IntakeError,
    JsonApplicationStore,
};
pub use domain::{
    application_token, notice_token, Application, CriteriaDecision, DedupeKey, Notice,
    NoticeStatus, ScreeningResult,
};
pub use merge::merge_notice_sources;
pub use notices::{
    notice_router, JsonNoticeStore, NoticeBoard, NoticeBoardError, NoticeDraft, NoticeStore,
};
pub use screening::{extract_text, screening_router, ScreeningClient};
pub use seed::seed_notices;
pub use storage::StoreError;
