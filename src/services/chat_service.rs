use crate::generator;
use crate::helpers::ApiError;
use crate::models;
use crate::storage::EntityStore;
use std::time::Duration;
use uuid::Uuid;

/// Bounds for the synthesized assistant reply length
const REPLY_MIN_LENGTH: usize = 100;
const REPLY_MAX_LENGTH: usize = 1000;

/// Chat threads are scoped to one identity within one project. Two
/// identities in the same project never share a thread.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThreadKey {
    pub project_id: String,
    pub user_id: String,
}

impl ThreadKey {
    pub fn new(project_id: &str, user_id: &str) -> Self {
        Self {
            project_id: project_id.to_string(),
            user_id: user_id.to_string(),
        }
    }
}

/// Simulated chat assistant backed by a store of per-thread message stores.
#[derive(Clone)]
pub struct ChatService {
    threads: EntityStore<ThreadKey, EntityStore<Uuid, models::Message>>,
    response_delay: Duration,
}

impl ChatService {
    pub fn new(
        threads: EntityStore<ThreadKey, EntityStore<Uuid, models::Message>>,
        response_delay: Duration,
    ) -> Self {
        Self {
            threads,
            response_delay,
        }
    }

    /// Record the caller's message and answer it with synthesized content.
    ///
    /// The assistant message is inserted as a loading placeholder before the
    /// simulated latency starts, so concurrent readers see it while the
    /// reply is pending. The fill runs on its own task and holds no lock
    /// while sleeping; an abandoned request still ends with a finalized
    /// message in the thread.
    pub async fn send_message(
        &self,
        project_id: &str,
        user_id: &str,
        text: String,
    ) -> Result<(models::Message, models::Message), ApiError> {
        let thread = self
            .threads
            .get_or_insert_with(ThreadKey::new(project_id, user_id), EntityStore::new)
            .await;

        let user_message = models::Message::from_user(user_id, text);
        thread.insert(user_message.id, user_message.clone()).await;

        let placeholder = models::Message::placeholder();
        thread.insert(placeholder.id, placeholder.clone()).await;

        tracing::debug!(
            project_id = project_id,
            message_id = %placeholder.id,
            "assistant reply pending"
        );

        let delay = self.response_delay;
        let fill = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let message = placeholder
                .finalize(generator::random_text_in_range(REPLY_MIN_LENGTH, REPLY_MAX_LENGTH));
            thread.insert(message.id, message.clone()).await;

            tracing::debug!(message_id = %message.id, "assistant reply finalized");
            message
        });

        let ai_message = fill.await.map_err(anyhow::Error::from)?;

        Ok((user_message, ai_message))
    }

    /// Every message in the caller's thread, unordered. An unknown thread
    /// lists as empty.
    pub async fn messages(&self, project_id: &str, user_id: &str) -> Vec<models::Message> {
        match self.threads.get(&ThreadKey::new(project_id, user_id)).await {
            Some(thread) => thread.list().await,
            None => Vec::new(),
        }
    }
}
