//! # Parley Chats Crate
//!
//! Business logic for chats and messages. The service validates input and
//! hands persistence to the stores from `parley-database`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use parley_chats::{ChatService, ChatServiceImpl};
//! use parley_database::{ChatRepository, MessageRepository, NewChat};
//!
//! # async fn demo(pool: parley_database::SqlitePool) -> parley_chats::ChatResult<()> {
//! let service = ChatServiceImpl::new(
//!     Arc::new(ChatRepository::new(pool.clone())),
//!     Arc::new(MessageRepository::new(pool)),
//! );
//! let chat_id = service
//!     .create_chat(NewChat { name: "book-club".into(), member_ids: vec![1, 2, 3] })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod services;
pub mod types;
pub mod utils;

pub use services::{ChatService, ChatServiceImpl};
pub use types::{ChatError, ChatResult, SentMessage};
pub use utils::Validator;
