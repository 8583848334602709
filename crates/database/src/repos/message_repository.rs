//! Repository for message data access operations.

use crate::entities::{ChatMessage, NewMessage};
use crate::types::DatabaseResult;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::info;

/// Persistence operations for chat messages.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Insert a message and return the identifier the store generated for it.
    async fn create(&self, message: &NewMessage) -> DatabaseResult<String>;
}

/// Repository for message database operations
#[derive(Clone)]
pub struct MessageRepository {
    pool: SqlitePool,
}

impl MessageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find message by ID
    pub async fn find_by_id(&self, message_id: &str) -> DatabaseResult<Option<ChatMessage>> {
        let message = sqlx::query_as::<_, (String, i64, i64, String, String)>(
            "SELECT id, chat_id, user_id, text, created_at FROM messages WHERE id = ?",
        )
        .bind(message_id)
        .fetch_optional(&self.pool)
        .await?
        .map(|(id, chat_id, user_id, text, created_at)| ChatMessage {
            id,
            chat_id,
            user_id,
            text,
            created_at,
        });

        Ok(message)
    }

    /// Count messages stored for a chat
    pub async fn count_for_chat(&self, chat_id: i64) -> DatabaseResult<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM messages WHERE chat_id = ?")
            .bind(chat_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count every stored message
    pub async fn count(&self) -> DatabaseResult<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM messages")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

pub(crate) fn insert_statement(
    message: &NewMessage,
    created_at: String,
) -> QueryBuilder<'static, Sqlite> {
    let mut builder =
        QueryBuilder::new("INSERT INTO messages (chat_id, user_id, text, created_at) ");
    builder.push_values(
        std::iter::once((message.chat_id, message.user_id, message.text.clone(), created_at)),
        |mut row, (chat_id, user_id, text, created_at)| {
            row.push_bind(chat_id)
                .push_bind(user_id)
                .push_bind(text)
                .push_bind(created_at);
        },
    );
    builder.push(" RETURNING id");
    builder
}

#[async_trait]
impl MessageStore for MessageRepository {
    async fn create(&self, message: &NewMessage) -> DatabaseResult<String> {
        let now = chrono::Utc::now().to_rfc3339();
        let mut statement = insert_statement(message, now);

        let message_id = statement
            .build_query_scalar::<String>()
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .next()
            .ok_or(sqlx::Error::RowNotFound)?;

        info!(
            message_id = %message_id,
            chat_id = message.chat_id,
            user_id = message.user_id,
            "stored chat message"
        );

        Ok(message_id)
    }
}
