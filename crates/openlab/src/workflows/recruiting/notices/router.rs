use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::auth::session::Identity;

use super::super::applications::ApplicationStore;
use super::super::domain::NoticeStatus;
use super::service::{NoticeBoard, NoticeBoardError, NoticeDraft};
use super::store::NoticeStore;

/// Router exposing the notice board endpoints.
pub fn notice_router<N, A>(board: Arc<NoticeBoard<N, A>>) -> Router
where
    N: NoticeStore + 'static,
    A: ApplicationStore + 'static,
{
    Router::new()
        .route("/posted-notices", get(list_handler::<N, A>))
        .route("/post-notice", post(post_handler::<N, A>))
        .route("/notice-status", post(status_handler::<N, A>))
        .route("/delete-notice", post(delete_handler::<N, A>))
        .route(
            "/notice-applications/:notice_id",
            get(applications_handler::<N, A>),
        )
        .with_state(board)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostNoticeRequest {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    duration: String,
    #[serde(default)]
    deadline: String,
    #[serde(default)]
    status: Option<NoticeStatus>,
    #[serde(default)]
    criteria: String,
    #[serde(
        default,
        deserialize_with = "crate::workflows::recruiting::domain::deserialize_roles"
    )]
    roles: Vec<String>,
    #[serde(default)]
    session: Option<Identity>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NoticeStatusRequest {
    id: String,
    status: NoticeStatus,
    session: Identity,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeleteNoticeRequest {
    id: String,
    session: Identity,
}

pub(crate) async fn list_handler<N, A>(
    State(board): State<Arc<NoticeBoard<N, A>>>,
) -> Response
where
    N: NoticeStore + 'static,
    A: ApplicationStore + 'static,
{
    let notices = board.list();
    axum::Json(json!({ "success": true, "notices": notices })).into_response()
}

pub(crate) async fn post_handler<N, A>(
    State(board): State<Arc<NoticeBoard<N, A>>>,
    axum::Json(request): axum::Json<PostNoticeRequest>,
) -> Response
where
    N: NoticeStore + 'static,
    A: ApplicationStore + 'static,
{
    let PostNoticeRequest {
        id,
        title,
        description,
        duration,
        deadline,
        status,
        criteria,
        roles,
        session,
    } = request;

    let draft = NoticeDraft {
        id,
        title,
        description,
        duration,
        deadline,
        status,
        criteria,
        roles,
    };

    match board.post(draft, session.as_ref()) {
        Ok(notice) => {
            axum::Json(json!({ "success": true, "notice": notice })).into_response()
        }
        Err(NoticeBoardError::MissingFields) => (
            StatusCode::BAD_REQUEST,
            axum::Json(json!({ "success": false, "error": "Missing required fields" })),
        )
            .into_response(),
        Err(NoticeBoardError::Store(err)) => internal_error(err),
    }
}

pub(crate) async fn status_handler<N, A>(
    State(board): State<Arc<NoticeBoard<N, A>>>,
    axum::Json(request): axum::Json<NoticeStatusRequest>,
) -> Response
where
    N: NoticeStore + 'static,
    A: ApplicationStore + 'static,
{
    match board.set_status(&request.id, &request.session, request.status) {
        Ok(updated) => axum::Json(json!({ "success": updated })).into_response(),
        Err(err) => internal_error(err),
    }
}

pub(crate) async fn delete_handler<N, A>(
    State(board): State<Arc<NoticeBoard<N, A>>>,
    axum::Json(request): axum::Json<DeleteNoticeRequest>,
) -> Response
where
    N: NoticeStore + 'static,
    A: ApplicationStore + 'static,
{
    match board.remove(&request.id, &request.session) {
        Ok(removed) => axum::Json(json!({ "success": removed })).into_response(),
        Err(err) => internal_error(err),
    }
}

pub(crate) async fn applications_handler<N, A>(
    State(board): State<Arc<NoticeBoard<N, A>>>,
    Path(notice_id): Path<String>,
) -> Response
where
    N: NoticeStore + 'static,
    A: ApplicationStore + 'static,
{
    let applications = board.applications_for(&notice_id);
    axum::Json(json!({ "success": true, "applications": applications })).into_response()
}

fn internal_error(err: impl std::fmt::Display) -> Response {
    tracing::error!(error = %err, "notice board store failure");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({ "success": false, "error": "Internal server error" })),
    )
        .into_response()
}

