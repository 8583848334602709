use std::net::SocketAddr;

use anyhow::Context;
use clap::{Parser, Subcommand};
use parley_config::load as load_config;
use parley_database::{initialize_database, ChatRepository, MessageRepository};
use parley_gateway::build_service;
use parley_runtime::{shutdown_signal, telemetry, BackendServices};
use tonic::transport::Server;
use tracing::info;

#[derive(Parser)]
#[command(name = "parley-server")]
#[command(about = "Parley chat backend (serves gRPC by default)")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the gRPC server
    Serve,
    /// Apply database migrations and exit
    Migrate,
    /// Print how many chats and messages are stored
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    telemetry::init_tracing().context("failed to initialise tracing")?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server().await,
        Commands::Migrate => migrate().await,
        Commands::Stats => stats().await,
    }
}

async fn run_server() -> anyhow::Result<()> {
    info!("starting Parley backend");

    let config = load_config().context("failed to load configuration")?;

    let services = BackendServices::initialise(&config)
        .await
        .context("failed to initialise backend services")?;

    let address: SocketAddr = config
        .grpc
        .bind_address()
        .parse()
        .with_context(|| format!("invalid grpc bind address {}", config.grpc.bind_address()))?;

    info!(%address, access = %config.access.endpoint, "grpc server listening");

    Server::builder()
        .timeout(config.grpc.request_timeout())
        .add_service(build_service(services.chats.clone(), services.access.clone()))
        .serve_with_shutdown(address, shutdown_signal())
        .await
        .context("grpc server error")?;

    services.db_pool.close().await;
    info!("backend shut down");
    Ok(())
}

async fn migrate() -> anyhow::Result<()> {
    let config = load_config().context("failed to load configuration")?;

    let pool = initialize_database(&config.database)
        .await
        .context("failed to migrate database")?;
    pool.close().await;

    println!("Database at {} is up to date", config.database.url);
    Ok(())
}

async fn stats() -> anyhow::Result<()> {
    let config = load_config().context("failed to load configuration")?;

    let pool = initialize_database(&config.database)
        .await
        .context("failed to open database")?;

    let chats = ChatRepository::new(pool.clone())
        .count()
        .await
        .context("failed to count chats")?;
    let messages = MessageRepository::new(pool.clone())
        .count()
        .await
        .context("failed to count messages")?;
    pool.close().await;

    println!("chats:    {chats}");
    println!("messages: {messages}");
    Ok(())
}
