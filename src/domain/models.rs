use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One submitted feedback record. Immutable once appended to the log.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FeedbackEntry {
    #[serde(default)]
    pub page: Option<String>,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Applied,
    Skipped,
    Error,
    Note,
}

impl ReportStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportStatus::Applied => "applied",
            ReportStatus::Skipped => "skipped",
            ReportStatus::Error => "error",
            ReportStatus::Note => "note",
        }
    }
}

/// Per-suggestion outcome returned to the caller. Transient: computed per
/// submission, never persisted.
#[derive(Debug, Serialize, Clone)]
pub struct SuggestionReport {
    pub rule: String,
    pub title: String,
    pub message: String,
    pub status: ReportStatus,
}

#[derive(Debug, Serialize)]
pub struct SubmitOutcome {
    pub persisted: bool,
    pub reports: Vec<SuggestionReport>,
}

#[derive(Serialize, Clone)]
pub struct RuleInfo {
    pub kind: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub general: ConfigGeneral,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigGeneral {
    #[serde(default)]
    pub pages_dir: Option<String>,
    #[serde(default)]
    pub feedback_file: Option<String>,
    #[serde(default)]
    pub disabled_rules: Vec<String>,
}
