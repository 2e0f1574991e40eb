//! Credential store behavior exercised through the public trait: uniqueness,
//! hashing, and the undifferentiated login failure.

use openlab::auth::store::{
    CredentialError, CredentialStore, JsonCredentialStore, SignupRequest, UserRole,
};
use tempfile::tempdir;

fn signup(email: &str, password: &str, role: UserRole, lab_name: &str) -> SignupRequest {
    SignupRequest {
        email: email.to_string(),
        password: password.to_string(),
        name: "Jamie".to_string(),
        role,
        lab_name: lab_name.to_string(),
    }
}

#[test]
fn signup_then_login_preserves_account_fields() {
    let dir = tempdir().expect("temp dir");
    let store = JsonCredentialStore::in_dir(dir.path());

    let created = store
        .signup(signup("Prof@OpenLab.dev", "correct-horse", UserRole::Lab, "Vision Lab"))
        .expect("signup succeeds");
    assert_eq!(created.email, "prof@openlab.dev");
    assert_eq!(created.role, UserRole::Lab);
    assert_eq!(created.lab_name, "Vision Lab");

    let logged_in = store
        .login("prof@openlab.dev", "correct-horse")
        .expect("login succeeds");
    assert_eq!(logged_in.id, created.id);
}

#[test]
fn email_uniqueness_survives_restarts() {
    let dir = tempdir().expect("temp dir");

    {
        let store = JsonCredentialStore::in_dir(dir.path());
        store
            .signup(signup("A@B.com", "password-one", UserRole::Student, ""))
            .expect("signup succeeds");
    }

    // A fresh store over the same file still sees the account.
    let store = JsonCredentialStore::in_dir(dir.path());
    match store.signup(signup("a@b.com", "password-two", UserRole::Student, "")) {
        Err(CredentialError::EmailTaken) => {}
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[test]
fn empty_credentials_are_validation_errors() {
    let dir = tempdir().expect("temp dir");
    let store = JsonCredentialStore::in_dir(dir.path());

    assert!(matches!(
        store.signup(signup("", "password", UserRole::Student, "")),
        Err(CredentialError::MissingCredentials)
    ));
    assert!(matches!(
        store.signup(signup("x@y.dev", "", UserRole::Student, "")),
        Err(CredentialError::MissingCredentials)
    ));
    assert!(matches!(
        store.login("", "password"),
        Err(CredentialError::MissingCredentials)
    ));
}

#[test]
fn master_accounts_sign_up_without_a_lab_name() {
    let dir = tempdir().expect("temp dir");
    let store = JsonCredentialStore::in_dir(dir.path());

    let account = store
        .signup(signup("master@openlab.dev", "operator-pass", UserRole::Master, ""))
        .expect("signup succeeds");
    assert_eq!(account.role, UserRole::Master);
}

#[test]
fn login_failure_does_not_reveal_which_part_was_wrong() {
    let dir = tempdir().expect("temp dir");
    let store = JsonCredentialStore::in_dir(dir.path());
    store
        .signup(signup("real@openlab.dev", "real-password", UserRole::Student, ""))
        .expect("signup succeeds");

    let unknown_email = store.login("fake@openlab.dev", "real-password");
    let wrong_password = store.login("real@openlab.dev", "fake-password");

    let unknown_message = unknown_email.expect_err("should fail").to_string();
    let wrong_message = wrong_password.expect_err("should fail").to_string();
    assert_eq!(unknown_message, wrong_message);
}
