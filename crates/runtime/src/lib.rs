use std::sync::Arc;

use anyhow::{Context, Result};
use parley_access::{AccessCheck, AccessClient};
use parley_chats::{ChatService, ChatServiceImpl};
use parley_config::AppConfig;
use parley_database::{initialize_database, ChatRepository, MessageRepository};
use sqlx::SqlitePool;
use tracing::info;

pub mod telemetry {
    use anyhow::Result;
    use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

    pub fn init_tracing() -> Result<()> {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = SubscriberBuilder::default()
            .with_env_filter(env_filter)
            .with_target(true)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|error| anyhow::anyhow!("failed to set tracing subscriber: {error}"))
    }
}

/// Long-lived handles shared by every inbound call.
#[derive(Clone)]
pub struct BackendServices {
    pub db_pool: SqlitePool,
    pub chats: Arc<dyn ChatService>,
    pub access: Arc<dyn AccessCheck>,
}

impl BackendServices {
    pub async fn initialise(config: &AppConfig) -> Result<Self> {
        let db_pool = initialize_database(&config.database)
            .await
            .context("failed to prepare database")?;

        let chats: Arc<dyn ChatService> = Arc::new(ChatServiceImpl::new(
            Arc::new(ChatRepository::new(db_pool.clone())),
            Arc::new(MessageRepository::new(db_pool.clone())),
        ));

        let access = AccessClient::connect_lazy(&config.access)
            .context("failed to configure access-control client")?;
        info!(endpoint = %config.access.endpoint, "access-control client ready");

        Ok(Self {
            db_pool,
            chats,
            access: Arc::new(access),
        })
    }
}

pub async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(?error, "failed to listen for shutdown signal");
    }
    info!("shutdown signal received");
}
