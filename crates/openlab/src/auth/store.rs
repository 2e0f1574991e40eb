use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::workflows::recruiting::storage::{read_array, write_array};

use super::password::{hash_password, verify_password};

/// Role attached to an account at signup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    Lab,
    Master,
}

/// Durable account record. The password hash never leaves the store module;
/// responses use [`PublicUser`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    #[serde(default)]
    pub name: String,
    pub role: UserRole,
    #[serde(default)]
    pub lab_name: String,
    pub created_at: String,
}

impl UserAccount {
    pub fn public_view(&self) -> PublicUser {
        PublicUser {
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
            lab_name: self.lab_name.clone(),
            created_at: self.created_at.clone(),
        }
    }
}

/// Account shape safe to return to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub lab_name: String,
    pub created_at: String,
}

/// Signup input after HTTP-layer extraction.
#[derive(Debug, Clone, Default)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: UserRole,
    pub lab_name: String,
}

/// Credential failures. Login failures are deliberately undifferentiated so
/// responses can't be used to enumerate accounts.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("email/password required")]
    MissingCredentials,
    #[error("labName required")]
    MissingLabName,
    #[error("email already exists")]
    EmailTaken,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("credential store unavailable: {0}")]
    Storage(String),
}

/// Persistence seam for user accounts.
pub trait CredentialStore: Send + Sync {
    fn signup(&self, request: SignupRequest) -> Result<UserAccount, CredentialError>;
    fn login(&self, email: &str, password: &str) -> Result<UserAccount, CredentialError>;
}

/// JSON-array file store for accounts, one append per signup. Email
/// uniqueness is case-insensitive; stored emails are normalized to
/// lowercase.
pub struct JsonCredentialStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join("users.json"))
    }
}

impl CredentialStore for JsonCredentialStore {
    fn signup(&self, request: SignupRequest) -> Result<UserAccount, CredentialError> {
        let email = request.email.trim().to_lowercase();
        let password = request.password;
        if email.is_empty() || password.is_empty() {
            return Err(CredentialError::MissingCredentials);
        }

        let lab_name = request.lab_name.trim().to_string();
        if request.role == UserRole::Lab && lab_name.is_empty() {
            return Err(CredentialError::MissingLabName);
        }

        let _guard = self.lock.lock().expect("credential store mutex poisoned");
        let mut accounts: Vec<UserAccount> = read_array(&self.path);

        if accounts
            .iter()
            .any(|account| account.email.eq_ignore_ascii_case(&email))
        {
            return Err(CredentialError::EmailTaken);
        }

        let password_hash =
            hash_password(&password).map_err(|err| CredentialError::Storage(err.to_string()))?;

        let now = Utc::now();
        let account = UserAccount {
            id: format!("usr-{:06}", now.timestamp_millis().rem_euclid(1_000_000)),
            email,
            password_hash,
            name: request.name.trim().to_string(),
            role: request.role,
            lab_name,
            created_at: now.to_rfc3339(),
        };

        accounts.push(account.clone());
        write_array(&self.path, &accounts)
            .map_err(|err| CredentialError::Storage(err.to_string()))?;

        Ok(account)
    }

    fn login(&self, email: &str, password: &str) -> Result<UserAccount, CredentialError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() || password.is_empty() {
            return Err(CredentialError::MissingCredentials);
        }

        let _guard = self.lock.lock().expect("credential store mutex poisoned");
        let accounts: Vec<UserAccount> = read_array(&self.path);

        let account = accounts
            .iter()
            .find(|account| account.email.eq_ignore_ascii_case(&email))
            .ok_or(CredentialError::InvalidCredentials)?;

        // Malformed stored hashes also surface as invalid credentials.
        match verify_password(password, &account.password_hash) {
            Ok(true) => Ok(account.clone()),
            _ => Err(CredentialError::InvalidCredentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn signup(email: &str, role: UserRole, lab_name: &str) -> SignupRequest {
        SignupRequest {
            email: email.to_string(),
            password: "hunter2hunter2".to_string(),
            name: "Jamie".to_string(),
            role,
            lab_name: lab_name.to_string(),
        }
    }

    #[test]
    fn signup_stores_hash_not_plaintext() {
        let dir = tempdir().expect("temp dir");
        let store = JsonCredentialStore::in_dir(dir.path());

        let account = store
            .signup(signup("jamie@openlab.dev", UserRole::Student, ""))
            .expect("signup succeeds");

        assert_ne!(account.password_hash, "hunter2hunter2");
        assert!(account.password_hash.starts_with("$argon2id$"));

        let raw = std::fs::read_to_string(dir.path().join("users.json")).expect("store file");
        assert!(!raw.contains("hunter2hunter2"));
    }

    #[test]
    fn duplicate_email_is_case_insensitive() {
        let dir = tempdir().expect("temp dir");
        let store = JsonCredentialStore::in_dir(dir.path());

        store
            .signup(signup("A@B.com", UserRole::Student, ""))
            .expect("first signup succeeds");
        match store.signup(signup("a@b.com", UserRole::Student, "")) {
            Err(CredentialError::EmailTaken) => {}
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[test]
    fn lab_role_requires_lab_name() {
        let dir = tempdir().expect("temp dir");
        let store = JsonCredentialStore::in_dir(dir.path());

        match store.signup(signup("lab@openlab.dev", UserRole::Lab, "  ")) {
            Err(CredentialError::MissingLabName) => {}
            other => panic!("expected missing labName, got {other:?}"),
        }
    }

    #[test]
    fn login_is_undifferentiated_for_unknown_and_wrong() {
        let dir = tempdir().expect("temp dir");
        let store = JsonCredentialStore::in_dir(dir.path());
        store
            .signup(signup("jamie@openlab.dev", UserRole::Student, ""))
            .expect("signup succeeds");

        let unknown = store.login("nobody@openlab.dev", "whatever");
        let wrong = store.login("jamie@openlab.dev", "not-the-password");
        assert!(matches!(unknown, Err(CredentialError::InvalidCredentials)));
        assert!(matches!(wrong, Err(CredentialError::InvalidCredentials)));
    }

    #[test]
    fn login_accepts_mixed_case_email() {
        let dir = tempdir().expect("temp dir");
        let store = JsonCredentialStore::in_dir(dir.path());
        store
            .signup(signup("Jamie@OpenLab.dev", UserRole::Student, ""))
            .expect("signup succeeds");

        let account = store
            .login("jamie@openlab.dev", "hunter2hunter2")
            .expect("login succeeds");
        assert_eq!(account.email, "jamie@openlab.dev");
    }
}
