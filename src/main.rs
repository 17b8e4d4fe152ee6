use mock_genai::configuration::get_configuration;
use mock_genai::startup::run;
use mock_genai::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = get_configuration().expect("Failed to read configuration.");

    let default_filter = if settings.debug { "debug" } else { "info" };
    let subscriber = get_subscriber("mock-genai".into(), default_filter.into());
    init_subscriber(subscriber);

    if settings.debug {
        tracing::warn!("Debug mode enabled");
    }
    tracing::debug!("Loaded configuration: {:?}", settings);

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener =
        TcpListener::bind(address).expect(&format!("failed to bind to {}", settings.app_port));

    run(listener, settings)?.await
}
