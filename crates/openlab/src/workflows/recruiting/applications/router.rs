use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use serde_json::json;

use super::super::notices::NoticeStore;
use super::super::screening::extract_text;
use super::service::{ApplicationIntake, ApplyRequest, IntakeError};
use super::store::ApplicationStore;

/// Router exposing the multipart application intake endpoint.
pub fn application_router<N, A>(intake: Arc<ApplicationIntake<N, A>>) -> Router
where
    N: NoticeStore + 'static,
    A: ApplicationStore + 'static,
{
    Router::new()
        .route("/apply", post(apply_handler::<N, A>))
        .with_state(intake)
}

pub(crate) async fn apply_handler<N, A>(
    State(intake): State<Arc<ApplicationIntake<N, A>>>,
    multipart: Multipart,
) -> Response
where
    N: NoticeStore + 'static,
    A: ApplicationStore + 'static,
{
    let request = match read_apply_form(multipart).await {
        Ok(request) => request,
        Err(()) => {
            return (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({ "success": false, "error": "Malformed form data" })),
            )
                .into_response();
        }
    };

    match intake.submit(request).await {
        Ok(application) => {
            axum::Json(json!({ "success": true, "application": application })).into_response()
        }
        Err(IntakeError::MissingFields) => (
            StatusCode::BAD_REQUEST,
            axum::Json(json!({ "success": false, "error": "Missing required fields" })),
        )
            .into_response(),
        Err(IntakeError::Store(err)) => {
            tracing::error!(error = %err, "application intake store failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(json!({ "success": false, "error": "Internal server error" })),
            )
                .into_response()
        }
    }
}

async fn read_apply_form(mut multipart: Multipart) -> Result<ApplyRequest, ()> {
    let mut request = ApplyRequest::default();

    while let Some(field) = multipart.next_field().await.map_err(|_| ())? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "noticeId" => request.notice_id = field.text().await.map_err(|_| ())?,
            "name" => request.name = field.text().await.map_err(|_| ())?,
            "email" => request.email = field.text().await.map_err(|_| ())?,
            "message" => request.message = field.text().await.map_err(|_| ())?,
            "resumeText" => {
                let text = field.text().await.map_err(|_| ())?;
                append_resume_text(&mut request.resume_text, &text);
            }
            "resume" => {
                request.resume_filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(|_| ())?;
                let extracted = extract_text(&bytes);
                append_resume_text(&mut request.resume_text, &extracted);
            }
            _ => {
                // Drain unknown fields so the stream stays consumable.
                let _ = field.bytes().await;
            }
        }
    }

    Ok(request)
}

fn append_resume_text(existing: &mut String, extracted: &str) {
    if extracted.is_empty() {
        return;
    }
    if !existing.is_empty() {
        existing.push('\n');
    }
    existing.push_str(extracted);
}
