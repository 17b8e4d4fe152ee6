use crate::helpers::ApiError;
use crate::services::ReportService;
use actix_web::{get, web, Responder};
use uuid::Uuid;

#[tracing::instrument(name = "List report metadata.", skip_all)]
#[get("")]
pub async fn list(report_service: web::Data<ReportService>) -> Result<impl Responder, ApiError> {
    let reports = report_service.list_metadata().await;

    Ok(web::Json(reports))
}

#[tracing::instrument(name = "Get report content.", skip_all)]
#[get("/{id}/content")]
pub async fn item(
    path: web::Path<(String, String)>,
    report_service: web::Data<ReportService>,
) -> Result<impl Responder, ApiError> {
    let (_project_id, id) = path.into_inner();
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::Validation("Invalid UUID".to_string()))?;

    let report = report_service.content(id).await?;

    Ok(web::Json(report))
}
