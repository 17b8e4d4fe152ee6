use crate::forms;
use crate::generator;
use crate::helpers::ApiError;
use crate::models;
use crate::services::IdGenerator;
use crate::storage::EntityStore;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// Characters of synthesized content in every generated report
const REPORT_CONTENT_LENGTH: usize = 5000;

/// Builds reports from request parameters and keeps them for the life of
/// the process. Reports are never mutated or deleted once stored.
#[derive(Clone)]
pub struct ReportService {
    reports: EntityStore<Uuid, models::Report>,
    id_generator: Arc<dyn IdGenerator>,
}

impl ReportService {
    pub fn new(
        reports: EntityStore<Uuid, models::Report>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            reports,
            id_generator,
        }
    }

    /// Build and persist a report, returning it with its content.
    ///
    /// A missing periodStart falls back to the epoch, a missing periodEnd
    /// to the current time. Nothing is stored when identifier allocation
    /// fails.
    pub async fn generate(
        &self,
        params: forms::ReportParams,
    ) -> Result<models::Report, ApiError> {
        let period_start = params.period_start.unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
        let period_end = params.period_end.unwrap_or_else(Utc::now);
        let user_ids = params.user_ids.unwrap_or_default();

        tracing::debug!(
            period_start = %period_start,
            period_end = %period_end,
            user_count = user_ids.len(),
            "generating report"
        );

        let id = self.id_generator.generate()?;
        let content = generator::random_text_of_length(REPORT_CONTENT_LENGTH);

        let report = models::Report {
            id,
            name: format!("Report {}", id),
            period_start,
            period_end,
            user_ids,
            content,
        };
        self.reports.insert(id, report.clone()).await;

        tracing::info!(report_id = %id, "report stored");
        Ok(report)
    }

    /// All stored reports with their content cleared.
    pub async fn list_metadata(&self) -> Vec<models::Report> {
        self.reports
            .list()
            .await
            .into_iter()
            .map(|report| report.metadata())
            .collect()
    }

    /// Full report including content.
    pub async fn content(&self, id: Uuid) -> Result<models::Report, ApiError> {
        self.reports
            .get(&id)
            .await
            .ok_or_else(|| ApiError::NotFound("Report not found".to_string()))
    }
}
