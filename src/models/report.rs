use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Synthesized report document.
///
/// `content` is omitted from the JSON body when it is empty, which is how
/// the metadata listing hides it without a separate wire type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: Uuid,
    pub name: String,
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
    pub user_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
}

impl Report {
    /// Copy of the report with its content cleared, for listing endpoints.
    pub fn metadata(&self) -> Report {
        Report {
            content: String::new(),
            ..self.clone()
        }
    }
}
