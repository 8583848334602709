//! Domain entities for the database layer

pub mod chat;
pub mod message;

pub use chat::{Chat, NewChat};
pub use message::{ChatMessage, NewMessage};
