use crate::forms;
use crate::helpers::ApiError;
use crate::models;
use crate::services::ChatService;
use actix_web::{post, web, Responder};
use std::sync::Arc;

#[tracing::instrument(name = "Send chat message.", skip_all)]
#[post("")]
pub async fn item(
    identity: web::ReqData<Arc<models::Identity>>,
    path: web::Path<(String,)>,
    form: web::Json<forms::ChatMessage>,
    chat_service: web::Data<ChatService>,
) -> Result<impl Responder, ApiError> {
    let (project_id,) = path.into_inner();

    let (user_message, ai_message) = chat_service
        .send_message(&project_id, &identity.user_id, form.into_inner().message)
        .await?;

    Ok(web::Json([user_message, ai_message]))
}
