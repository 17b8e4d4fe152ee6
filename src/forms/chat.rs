use serde::Deserialize;

/// Inbound chat message. The text is taken verbatim, with no length limit
/// and no sanitization.
#[derive(Debug, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub message: String,
}
