use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub app_port: u16,
    pub app_host: String,
    pub debug: bool,
    pub chat: ChatSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ChatSettings {
    /// Simulated generation latency applied before an assistant reply is filled in
    pub response_delay_ms: u64,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize our configuration reader
    let mut settings = config::Config::default();

    // Add configuration values from a file named `configuration`
    // with the .yaml extension
    settings.merge(config::File::with_name("configuration"))?; // .json, .toml, .yaml, .yml

    // Try to convert the configuration values it read into
    // our Settings type
    let mut config: Settings = settings.try_deserialize()?;

    // Deployment environments override the file through SERVER_PORT / DEBUG
    if let Ok(port) = std::env::var("SERVER_PORT") {
        config.app_port = port
            .parse()
            .map_err(|_| config::ConfigError::Message(format!("invalid SERVER_PORT: {}", port)))?;
    }
    if let Ok(debug) = std::env::var("DEBUG") {
        config.debug = debug.parse().unwrap_or(false);
    }

    Ok(config)
}
