//! Chat service for managing chat operations.

use std::sync::Arc;

use async_trait::async_trait;
use parley_database::{ChatStore, MessageStore, NewChat, NewMessage};
use tracing::debug;

use crate::types::{ChatResult, SentMessage};
use crate::utils::Validator;

/// Chat and message operations exposed to the API layer.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Create a chat and return its identifier.
    async fn create_chat(&self, chat: NewChat) -> ChatResult<i64>;

    /// Delete a chat. Deleting an unknown chat succeeds.
    async fn delete_chat(&self, chat_id: i64) -> ChatResult<()>;

    /// Store a message in a chat.
    async fn send_message(&self, message: NewMessage) -> ChatResult<SentMessage>;
}

/// Service for managing chat operations
#[derive(Clone)]
pub struct ChatServiceImpl {
    chats: Arc<dyn ChatStore>,
    messages: Arc<dyn MessageStore>,
}

impl ChatServiceImpl {
    /// Create a new chat service instance
    pub fn new(chats: Arc<dyn ChatStore>, messages: Arc<dyn MessageStore>) -> Self {
        Self { chats, messages }
    }
}

#[async_trait]
impl ChatService for ChatServiceImpl {
    async fn create_chat(&self, chat: NewChat) -> ChatResult<i64> {
        Validator::chat_name(&chat.name)?;
        Validator::member_ids(&chat.member_ids)?;

        let chat_id = self.chats.create(&chat).await?;
        debug!(chat_id, "create chat finished");
        Ok(chat_id)
    }

    async fn delete_chat(&self, chat_id: i64) -> ChatResult<()> {
        let removed = self.chats.delete(chat_id).await?;
        debug!(chat_id, removed, "chat delete finished");
        Ok(())
    }

    async fn send_message(&self, message: NewMessage) -> ChatResult<SentMessage> {
        Validator::message_text(&message.text)?;

        let id = self.messages.create(&message).await?;
        Ok(SentMessage {
            id,
            chat_id: message.chat_id,
        })
    }
}
