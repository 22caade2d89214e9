//! nimbus-ingest Server Binary
//!
//! Starts the TCP ingestion server.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use nimbus_ingest::network::Server;
use nimbus_ingest::{Config, Store};

/// nimbus-ingest server
#[derive(Parser, Debug)]
#[command(name = "nimbus-server")]
#[command(about = "TCP ingestion service for customer records")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:5784")]
    listen: String,

    /// Path of the append-only store file
    #[arg(short, long, default_value = "./nimbus_data/customers.txt")]
    store: String,

    /// Connection read timeout in milliseconds (0 disables)
    #[arg(long, default_value = "5000")]
    read_timeout_ms: u64,

    /// Connection write timeout in milliseconds (0 disables)
    #[arg(long, default_value = "5000")]
    write_timeout_ms: u64,
}

fn main() {
    // Honor a .env file if present (mail settings live there)
    dotenvy::dotenv().ok();

    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,nimbus_ingest=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("nimbus-ingest server v{}", nimbus_ingest::VERSION);
    tracing::info!("Listen address: {}", args.listen);
    tracing::info!("Store file: {}", args.store);

    // Build config from args
    let config = Config::builder()
        .listen_addr(&args.listen)
        .store_path(&args.store)
        .read_timeout_ms(args.read_timeout_ms)
        .write_timeout_ms(args.write_timeout_ms)
        .build();

    // Open the store once; every connection shares this handle
    let store = match Store::open(&config.store_path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            std::process::exit(1);
        }
    };

    // Bind and serve until stopped
    let server = match Server::bind(config, store) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to bind listener: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
