//! Accounts and sessions: Argon2id credential storage, the signup/login
//! endpoints, and the explicit session identity model.

pub mod password;
pub mod router;
pub mod session;
pub mod store;

pub use router::auth_router;
pub use session::{EffectiveRole, Identity, Profile, SessionMode};
pub use store::{
    CredentialError, CredentialStore, JsonCredentialStore, PublicUser, SignupRequest, UserAccount,
    UserRole,
};
