use mock_genai::configuration::{get_configuration, Settings};

pub struct TestApp {
    pub address: String,
}

pub async fn spawn_app_with_configuration(configuration: Settings) -> TestApp {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server =
        mock_genai::startup::run(listener, configuration).expect("Failed to bind address.");

    let _ = tokio::spawn(server);
    println!("Used Port: {}", port);

    TestApp { address }
}

pub async fn spawn_app() -> TestApp {
    let mut configuration = get_configuration().expect("Failed to get configuration");
    // the production delay would dominate the suite
    configuration.chat.response_delay_ms = 50;

    spawn_app_with_configuration(configuration).await
}
