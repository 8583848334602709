//! Repository for chat data access operations.

use crate::entities::{Chat, NewChat};
use crate::types::DatabaseResult;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use tracing::{debug, info};

/// Persistence operations the chat service needs.
#[async_trait]
pub trait ChatStore: Send + Sync {
    /// Insert a chat and return the identifier the store generated for it.
    async fn create(&self, chat: &NewChat) -> DatabaseResult<i64>;

    /// Delete a chat by identifier and return the number of rows removed.
    async fn delete(&self, chat_id: i64) -> DatabaseResult<u64>;
}

/// Repository for chat database operations
#[derive(Clone)]
pub struct ChatRepository {
    pool: SqlitePool,
}

impl ChatRepository {
    /// Create a new chat repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find chat by ID
    pub async fn find_by_id(&self, chat_id: i64) -> DatabaseResult<Option<Chat>> {
        let row = sqlx::query("SELECT id, name, member_ids, created_at FROM chats WHERE id = ?")
            .bind(chat_id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let member_ids: String = row.try_get("member_ids")?;

        Ok(Some(Chat {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            member_ids: serde_json::from_str(&member_ids)?,
            created_at: row.try_get("created_at")?,
        }))
    }

    /// Count stored chats
    pub async fn count(&self) -> DatabaseResult<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM chats")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

pub(crate) fn insert_statement(
    chat: &NewChat,
    created_at: String,
) -> DatabaseResult<QueryBuilder<'static, Sqlite>> {
    let member_ids = serde_json::to_string(&chat.member_ids)?;

    let mut builder = QueryBuilder::new("INSERT INTO chats (name, member_ids, created_at) ");
    builder.push_values(
        std::iter::once((chat.name.clone(), member_ids, created_at)),
        |mut row, (name, member_ids, created_at)| {
            row.push_bind(name).push_bind(member_ids).push_bind(created_at);
        },
    );
    builder.push(" RETURNING id");
    Ok(builder)
}

pub(crate) fn delete_statement(chat_id: i64) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::new("DELETE FROM chats WHERE id = ");
    builder.push_bind(chat_id);
    builder
}

#[async_trait]
impl ChatStore for ChatRepository {
    async fn create(&self, chat: &NewChat) -> DatabaseResult<i64> {
        let now = chrono::Utc::now().to_rfc3339();
        let mut statement = insert_statement(chat, now)?;

        // Drain the statement so the insert has committed before the id is handed out.
        let chat_id = statement
            .build_query_scalar::<i64>()
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .next()
            .ok_or(sqlx::Error::RowNotFound)?;

        info!(
            chat_id,
            members = chat.member_ids.len(),
            "created new chat"
        );

        Ok(chat_id)
    }

    async fn delete(&self, chat_id: i64) -> DatabaseResult<u64> {
        let mut statement = delete_statement(chat_id);
        let result = statement.build().execute(&self.pool).await?;
        let rows_affected = result.rows_affected();

        if rows_affected == 0 {
            debug!(chat_id, "delete matched no chat");
        } else {
            info!(chat_id, rows_affected, "deleted chat");
        }

        Ok(rows_affected)
    }
}
