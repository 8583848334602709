//! Business logic services for the chat system.
//!
//! Services validate input and coordinate the stores. They hold no state
//! between calls and never build SQL themselves.

pub mod chat_service;

pub use chat_service::{ChatService, ChatServiceImpl};
