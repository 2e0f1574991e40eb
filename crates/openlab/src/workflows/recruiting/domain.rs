use chrono::DateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle state of a posted notice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeStatus {
    #[default]
    Open,
    Closed,
}

impl NoticeStatus {
    pub const fn label(self) -> &'static str {
        match self {
            NoticeStatus::Open => "open",
            NoticeStatus::Closed => "closed",
        }
    }
}

/// A lab-posted micro-research task listing. Serialized camelCase to match
/// the flat-file layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub deadline: String,
    #[serde(default)]
    pub status: NoticeStatus,
    #[serde(default)]
    pub criteria: String,
    #[serde(default, deserialize_with = "deserialize_roles")]
    pub roles: Vec<String>,
    #[serde(default)]
    pub lab_name: String,
    #[serde(default)]
    pub owner_email: String,
    #[serde(default)]
    pub created_at: String,
}

impl Notice {
    /// Ownership check backing owner-scoped mutation. Anonymous notices
    /// (empty `owner_email`) are owned by nobody.
    pub fn is_owned_by(&self, email: &str) -> bool {
        let owner = self.owner_email.trim();
        let claimant = email.trim();
        !owner.is_empty() && !claimant.is_empty() && owner.eq_ignore_ascii_case(claimant)
    }
}

/// A student's submission against a notice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub notice_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub resume_filename: String,
    #[serde(default)]
    pub resume_content: String,
    #[serde(default)]
    pub screening_result: Option<ScreeningResult>,
    #[serde(default)]
    pub created_at: String,
}

impl Application {
    pub fn dedupe_key(&self) -> DedupeKey {
        DedupeKey::new(&self.notice_id, &self.email, &self.name)
    }

    /// Parsed submission timestamp. `None` for unparseable values, which the
    /// normalization pass treats as infinitely late.
    pub fn created_at_millis(&self) -> Option<i64> {
        DateTime::parse_from_rfc3339(self.created_at.trim())
            .ok()
            .map(|dt| dt.timestamp_millis())
    }
}

/// Composite `(noticeId, email, name)` identity enforcing at-most-one
/// submission per applicant per notice. Email and name compare
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupeKey {
    notice_id: String,
    email: String,
    name: String,
}

impl DedupeKey {
    pub fn new(notice_id: &str, email: &str, name: &str) -> Self {
        Self {
            notice_id: notice_id.trim().to_string(),
            email: email.trim().to_lowercase(),
            name: name.trim().to_lowercase(),
        }
    }
}

/// Per-criterion verdict produced by the screener.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriteriaDecision {
    pub criteria: String,
    pub decision: bool,
    #[serde(default)]
    pub reasoning: String,
}

/// Outcome of screening one resume against one notice's criteria. Produced
/// once at submission time and stored immutably with the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningResult {
    pub success: bool,
    #[serde(default)]
    pub criteria_decisions: Vec<CriteriaDecision>,
    #[serde(default)]
    pub overall_decision: bool,
    #[serde(default)]
    pub overall_reasoning: String,
}

/// Time-derived notice token, e.g. `NL-834201`.
pub fn notice_token(now_millis: i64) -> String {
    format!("NL-{:06}", now_millis.rem_euclid(1_000_000))
}

/// Time-derived application token, e.g. `app-834201`.
pub fn application_token(now_millis: i64) -> String {
    format!("app-{:06}", now_millis.rem_euclid(1_000_000))
}

/// Roles arrive either as an array or as a comma-separated string.
pub(crate) fn deserialize_roles<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawRoles {
        List(Vec<String>),
        Csv(String),
    }

    let raw = Option::<RawRoles>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawRoles::List(list)) => list
            .into_iter()
            .map(|role| role.trim().to_string())
            .filter(|role| !role.is_empty())
            .collect(),
        Some(RawRoles::Csv(csv)) => csv
            .split(',')
            .map(|role| role.trim().to_string())
            .filter(|role| !role.is_empty())
            .collect(),
        None => Vec::new(),
    })
}
