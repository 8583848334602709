//! Parley Database Crate
//!
//! This crate provides the relational store for the Parley chat backend,
//! including connection management, migrations, and repository implementations.

use parley_config::DatabaseConfig;

pub mod connection;
pub mod entities;
pub mod migrations;
pub mod repos;
pub mod types;

pub use connection::prepare_database;
pub use migrations::run_migrations;

pub use repos::{ChatRepository, ChatStore, MessageRepository, MessageStore};

pub use entities::{Chat, ChatMessage, NewChat, NewMessage};

pub use types::{DatabaseError, DatabaseResult};

/// Re-export commonly used types for convenience
pub use sqlx::SqlitePool;

/// Initialize the database with migrations
pub async fn initialize_database(config: &DatabaseConfig) -> DatabaseResult<SqlitePool> {
    let pool = prepare_database(config)
        .await
        .map_err(|e| DatabaseError::ConnectionError(format!("{e:#}")))?;

    run_migrations(&pool)
        .await
        .map_err(|e| DatabaseError::MigrationError(format!("{e:#}")))?;

    Ok(pool)
}
