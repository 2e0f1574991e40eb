//! Posted-notice board: JSON-file store, owner-scoped mutation, and the
//! merged listing served to students.

pub mod router;
pub mod service;
pub mod store;

pub use router::notice_router;
pub use service::{NoticeBoard, NoticeBoardError, NoticeDraft};
pub use store::{JsonNoticeStore, NoticeStore};
