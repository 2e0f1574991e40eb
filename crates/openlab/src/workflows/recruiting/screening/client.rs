use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::ScreeningConfig;

use super::super::domain::{CriteriaDecision, ScreeningResult};
use super::heuristic;

/// JSON body forwarded to the external scoring service.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpstreamRequest<'a> {
    job_description: &'a str,
    criteria: &'a str,
    resume_text: &'a str,
}

/// Tolerant view of the upstream response; missing fields default rather
/// than fail so a partially-shaped body still normalizes.
#[derive(Debug, Deserialize)]
struct UpstreamResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    criteria_decisions: Vec<CriteriaDecision>,
    #[serde(default)]
    overall_decision: bool,
    #[serde(default)]
    overall_reasoning: String,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum UpstreamError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("non-success status {0}")]
    Status(u16),
    #[error("upstream reported failure: {0}")]
    Rejected(String),
}

/// Resume screener with an ordered fallback chain: configured upstream
/// service first, local heuristic otherwise. `screen` never fails; upstream
/// problems (timeout included) are logged and absorbed.
pub struct ScreeningClient {
    http: reqwest::Client,
    upstream_url: Option<String>,
    pass_ratio: f32,
}

impl ScreeningClient {
    pub fn from_config(config: &ScreeningConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            http,
            upstream_url: config.upstream_url.clone(),
            pass_ratio: config.pass_ratio,
        })
    }

    /// Heuristic-only client for tests, demos, and offline runs.
    pub fn local(pass_ratio: f32) -> Self {
        Self {
            http: reqwest::Client::new(),
            upstream_url: None,
            pass_ratio,
        }
    }

    pub async fn screen(
        &self,
        resume_text: &str,
        job_description: &str,
        criteria: &str,
    ) -> ScreeningResult {
        if let Some(url) = &self.upstream_url {
            match self
                .forward(url, resume_text, job_description, criteria)
                .await
            {
                Ok(result) => return result,
                Err(err) => {
                    warn!(error = %err, "upstream screener unavailable, falling back to heuristic");
                }
            }
        }

        heuristic::screen(resume_text, criteria, self.pass_ratio)
    }

    async fn forward(
        &self,
        url: &str,
        resume_text: &str,
        job_description: &str,
        criteria: &str,
    ) -> Result<ScreeningResult, UpstreamError> {
        let response = self
            .http
            .post(url)
            .json(&UpstreamRequest {
                job_description,
                criteria,
                resume_text,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body: UpstreamResponse = response.json().await?;
        if !body.success {
            return Err(UpstreamError::Rejected(
                body.error
                    .unwrap_or_else(|| "unspecified upstream error".to_string()),
            ));
        }

        Ok(ScreeningResult {
            success: true,
            criteria_decisions: body.criteria_decisions,
            overall_decision: body.overall_decision,
            overall_reasoning: body.overall_reasoning,
        })
    }
}
