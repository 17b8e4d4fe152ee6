use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One turn in a chat thread.
///
/// `user_id` is the author for user messages and null for assistant
/// messages. `loading` is true only on an assistant placeholder that has
/// not received its content yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub user_id: Option<String>,
    pub content: String,
    pub loading: bool,
}

impl Message {
    /// A finalized user message carrying `content` verbatim.
    pub fn from_user(user_id: &str, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            user_id: Some(user_id.to_string()),
            content,
            loading: false,
        }
    }

    /// An assistant placeholder: empty content, loading set.
    pub fn placeholder() -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            user_id: None,
            content: String::new(),
            loading: true,
        }
    }

    /// Attach the synthesized content, keeping the identifier and timestamp
    /// of the placeholder this finalizes.
    pub fn finalize(mut self, content: String) -> Self {
        self.content = content;
        self.loading = false;
        self
    }
}
