use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Report generation parameters. Every field may be left out; user ids are
/// passed through uninterpreted, with no existence check.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportParams {
    pub period_start: Option<DateTime<Utc>>,
    pub period_end: Option<DateTime<Utc>>,
    pub user_ids: Option<Vec<String>>,
}
