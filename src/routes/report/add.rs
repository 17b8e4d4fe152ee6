use crate::forms;
use crate::helpers::ApiError;
use crate::services::ReportService;
use actix_web::{post, web, HttpResponse, Responder};

#[tracing::instrument(name = "Generate report.", skip_all)]
#[post("")]
pub async fn item(
    body: web::Bytes,
    report_service: web::Data<ReportService>,
) -> Result<impl Responder, ApiError> {
    // An absent body is a valid request; everything falls back to defaults.
    let params = if body.is_empty() {
        forms::ReportParams::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|_| ApiError::Validation("Invalid parameters".to_string()))?
    };

    let report = report_service.generate(params).await?;

    Ok(HttpResponse::Created().json(report))
}
