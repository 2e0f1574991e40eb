use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use serde::Deserialize;
use serde_json::json;

use super::store::{CredentialError, CredentialStore, SignupRequest, UserRole};

/// Router exposing signup and login.
pub fn auth_router<S>(store: Arc<S>) -> Router
where
    S: CredentialStore + 'static,
{
    Router::new()
        .route("/auth/signup", post(signup_handler::<S>))
        .route("/auth/login", post(login_handler::<S>))
        .with_state(store)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignupBody {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    role: UserRole,
    #[serde(default)]
    lab_name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginBody {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

pub(crate) async fn signup_handler<S>(
    State(store): State<Arc<S>>,
    axum::Json(body): axum::Json<SignupBody>,
) -> Response
where
    S: CredentialStore + 'static,
{
    let request = SignupRequest {
        email: body.email,
        password: body.password,
        name: body.name,
        role: body.role,
        lab_name: body.lab_name,
    };

    match store.signup(request) {
        Ok(account) => {
            axum::Json(json!({ "success": true, "user": account.public_view() })).into_response()
        }
        Err(err) => credential_error_response(err),
    }
}

pub(crate) async fn login_handler<S>(
    State(store): State<Arc<S>>,
    axum::Json(body): axum::Json<LoginBody>,
) -> Response
where
    S: CredentialStore + 'static,
{
    match store.login(&body.email, &body.password) {
        Ok(account) => {
            axum::Json(json!({ "success": true, "user": account.public_view() })).into_response()
        }
        Err(err) => credential_error_response(err),
    }
}

fn credential_error_response(err: CredentialError) -> Response {
    let status = match &err {
        CredentialError::MissingCredentials | CredentialError::MissingLabName => {
            StatusCode::BAD_REQUEST
        }
        CredentialError::EmailTaken => StatusCode::CONFLICT,
        CredentialError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        CredentialError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "credential store failure");
        return (
            status,
            axum::Json(json!({ "success": false, "error": "Internal server error" })),
        )
            .into_response();
    }

    (
        status,
        axum::Json(json!({ "success": false, "error": err.to_string() })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::store::JsonCredentialStore;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tempfile::tempdir;
    use tower::ServiceExt;

    fn build_router(dir: &std::path::Path) -> Router {
        auth_router(Arc::new(JsonCredentialStore::in_dir(dir)))
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    async fn read_json_body(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 64)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn signup_then_login_round_trip() {
        let dir = tempdir().expect("temp dir");
        let router = build_router(dir.path());

        let response = router
            .clone()
            .oneshot(json_request(
                "/auth/signup",
                json!({
                    "email": "lab@openlab.dev",
                    "password": "correct-horse",
                    "role": "lab",
                    "labName": "Vision Lab",
                }),
            ))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["success"], json!(true));
        assert_eq!(payload["user"]["role"], json!("lab"));
        assert!(payload["user"].get("passwordHash").is_none());

        let response = router
            .oneshot(json_request(
                "/auth/login",
                json!({ "email": "LAB@openlab.dev", "password": "correct-horse" }),
            ))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["user"]["email"], json!("lab@openlab.dev"));
    }

    #[tokio::test]
    async fn missing_password_is_a_bad_request() {
        let dir = tempdir().expect("temp dir");
        let router = build_router(dir.path());

        let response = router
            .oneshot(json_request(
                "/auth/signup",
                json!({ "email": "x@openlab.dev" }),
            ))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload = read_json_body(response).await;
        assert_eq!(payload["success"], json!(false));
    }

    #[tokio::test]
    async fn duplicate_signup_conflicts() {
        let dir = tempdir().expect("temp dir");
        let router = build_router(dir.path());
        let body = json!({ "email": "dup@openlab.dev", "password": "pw-pw-pw" });

        let first = router
            .clone()
            .oneshot(json_request("/auth/signup", body.clone()))
            .await
            .expect("router dispatch");
        assert_eq!(first.status(), StatusCode::OK);

        let second = router
            .oneshot(json_request("/auth/signup", body))
            .await
            .expect("router dispatch");
        assert_eq!(second.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn bad_login_is_unauthorized() {
        let dir = tempdir().expect("temp dir");
        let router = build_router(dir.path());

        let response = router
            .oneshot(json_request(
                "/auth/login",
                json!({ "email": "ghost@openlab.dev", "password": "nope" }),
            ))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let payload = read_json_body(response).await;
        assert_eq!(payload["error"], json!("invalid credentials"));
    }
}
