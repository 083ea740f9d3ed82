// src/main.rs
use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use supplier_inventory::config::{Config, StorageBackend};
use supplier_inventory::error::AppError;
use supplier_inventory::store::{MemoryStore, PgStore, Store};
use supplier_inventory::{app, database, AppState};

// Ports tried after the configured one when it is taken.
const PORT_FALLBACKS: u16 = 20;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return;
        }
    };

    let store = match build_store(&config).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Failed to initialise storage");
            return;
        }
    };

    let Some((listener, addr)) = bind_listener(&config).await else {
        tracing::error!(
            "Failed to bind to any port starting at {} on {}",
            config.port,
            config.host
        );
        return;
    };
    tracing::info!("Server running on {}", addr);

    if let Err(e) = axum::serve(listener, app(AppState::new(store))).await {
        tracing::error!(error = %e, "Server error");
    }
}

async fn bind_listener(config: &Config) -> Option<(TcpListener, SocketAddr)> {
    for offset in 0..=PORT_FALLBACKS {
        let addr = SocketAddr::from((config.host, config.port.saturating_add(offset)));
        match TcpListener::bind(addr).await {
            Ok(listener) => return Some((listener, addr)),
            Err(e) if offset == 0 => tracing::warn!(%addr, error = %e, "Port in use, trying next"),
            Err(_) => {}
        }
    }
    None
}

async fn build_store(config: &Config) -> Result<Arc<dyn Store>, AppError> {
    match config.storage {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on exit");
            Ok(Arc::new(MemoryStore::new()))
        }
        StorageBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .ok_or_else(|| AppError::internal("DATABASE_URL must be set"))?;
            let db_pool = database::create_pool(url, config.max_connections)
                .await
                .map_err(|e| AppError::internal(format!("connecting to database: {e}")))?;
            database::init_schema(&db_pool)
                .await
                .map_err(|e| AppError::internal(format!("creating schema: {e}")))?;
            Ok(Arc::new(PgStore::new(db_pool)))
        }
    }
}
