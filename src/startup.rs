use crate::configuration::Settings;
use crate::helpers::ApiError;
use crate::middleware;
use crate::models;
use crate::routes;
use crate::services::{ChatService, RandomIdGenerator, ReportService};
use crate::storage::EntityStore;
use actix_cors::Cors;
use actix_web::{dev::Server, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use tracing_actix_web::TracingLogger;
use uuid::Uuid;

pub fn run(listener: TcpListener, settings: Settings) -> Result<Server, std::io::Error> {
    let reports = EntityStore::<Uuid, models::Report>::new();
    let report_service = web::Data::new(ReportService::new(reports, Arc::new(RandomIdGenerator)));

    let threads = EntityStore::new();
    let chat_service = web::Data::new(ChatService::new(
        threads,
        Duration::from_millis(settings.chat.response_delay_ms),
    ));

    let chat_json_config = web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|_err, _req| {
            ApiError::Validation("Invalid message format".to_string()).into()
        });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/projects/{project_id}")
                    .service(
                        web::scope("/reports")
                            .service(routes::report::get::list)
                            .service(routes::report::get::item)
                            .service(routes::report::add::item),
                    )
                    .service(
                        web::scope("/chat")
                            .wrap(middleware::Authentication::new())
                            .app_data(chat_json_config.clone())
                            .service(routes::chat::get::list)
                            .service(routes::chat::send::item),
                    ),
            )
            .app_data(report_service.clone())
            .app_data(chat_service.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
