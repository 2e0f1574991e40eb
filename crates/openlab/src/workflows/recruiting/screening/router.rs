use std::sync::Arc;

use axum::extract::{FromRequest, Multipart, Request, State};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Form, Router};
use serde::Deserialize;
use serde_json::json;

use super::client::ScreeningClient;
use super::extract_text;

/// Router exposing the standalone screening endpoint. Always responds `200`:
/// either a screening result or `{success:false, error}`.
pub fn screening_router(client: Arc<ScreeningClient>) -> Router {
    Router::new()
        .route("/resume-screen", post(screen_handler))
        .with_state(client)
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScreenForm {
    #[serde(default)]
    job_description: String,
    #[serde(default)]
    criteria: String,
    #[serde(default)]
    resume_text: String,
}

pub(crate) async fn screen_handler(
    State(client): State<Arc<ScreeningClient>>,
    request: Request,
) -> Response {
    let form = match read_screen_form(request).await {
        Ok(form) => form,
        Err(error) => {
            return axum::Json(json!({ "success": false, "error": error })).into_response();
        }
    };

    let result = client
        .screen(&form.resume_text, &form.job_description, &form.criteria)
        .await;
    axum::Json(result).into_response()
}

/// Accepts either multipart (with an optional `resume` upload) or a plain
/// urlencoded form.
async fn read_screen_form(request: Request) -> Result<ScreenForm, String> {
    let content_type = request
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, &())
            .await
            .map_err(|_| "Form parse error".to_string())?;
        read_multipart(multipart).await
    } else {
        let Form(form) = Form::<ScreenForm>::from_request(request, &())
            .await
            .map_err(|_| "Form parse error".to_string())?;
        Ok(form)
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<ScreenForm, String> {
    let mut form = ScreenForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| "Form parse error".to_string())?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "jobDescription" => {
                form.job_description = field
                    .text()
                    .await
                    .map_err(|_| "Form parse error".to_string())?;
            }
            "criteria" => {
                form.criteria = field
                    .text()
                    .await
                    .map_err(|_| "Form parse error".to_string())?;
            }
            "resumeText" => {
                form.resume_text = field
                    .text()
                    .await
                    .map_err(|_| "Form parse error".to_string())?;
            }
            "resume" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| "Form parse error".to_string())?;
                let extracted = extract_text(&bytes);
                if form.resume_text.is_empty() {
                    form.resume_text = extracted;
                } else if !extracted.is_empty() {
                    form.resume_text.push('\n');
                    form.resume_text.push_str(&extracted);
                }
            }
            _ => {
                // Drain unknown fields so the stream stays consumable.
                let _ = field.bytes().await;
            }
        }
    }

    Ok(form)
}
