//! Application intake: the deduplicating JSON-file store and the multipart
//! submission endpoint.

pub mod router;
pub mod service;
pub mod store;

pub use router::application_router;
pub use service::{ApplicationIntake, ApplyRequest, IntakeError};
pub use store::{ApplicationStore, JsonApplicationStore};
