//! Shared types for the chat system.

pub mod errors;

pub use errors::{ChatError, ChatResult};

/// Identifiers handed back after a message was stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub id: String,
    pub chat_id: i64,
}
