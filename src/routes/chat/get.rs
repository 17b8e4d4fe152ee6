use crate::helpers::ApiError;
use crate::models;
use crate::services::ChatService;
use actix_web::{get, web, Responder};
use std::sync::Arc;

#[tracing::instrument(name = "List chat messages.", skip_all)]
#[get("")]
pub async fn list(
    identity: web::ReqData<Arc<models::Identity>>,
    path: web::Path<(String,)>,
    chat_service: web::Data<ChatService>,
) -> Result<impl Responder, ApiError> {
    let (project_id,) = path.into_inner();

    let messages = chat_service.messages(&project_id, &identity.user_id).await;

    Ok(web::Json(messages))
}
