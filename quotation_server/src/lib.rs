//! Quotation HTTP service.
//!
//! Exposes `GET /cotacao`. Each request runs one linear sequence:
//!
//! - `fetcher` — call the external quotation API under the fetch deadline and decode
//!   the nested, string-encoded `bid` (see `model::api`).
//! - `store` — open the SQLite file, create the `cotacoes` table if needed, and insert
//!   the bid, all under the persistence deadline.
//! - `handler` — answer `200 {"bid": ...}` or `500 <message>` for the first failed step.
//!
//! Requests share nothing but the immutable config and the `reqwest::Client`; the store
//! connection is opened and closed per request.
#![warn(missing_docs)]
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use log::{error, info};
use quotation_common::net::{self, FETCH_TIMEOUT, PERSIST_TIMEOUT, QUOTATION_PATH, SERVICE_PORT, UPSTREAM_URL};
use quotation_common::{QuotationError, Result};
use tokio::net::TcpListener;

pub mod fetcher;
pub mod handler;
pub mod model;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

/// SQLite file used when none is configured.
pub const DATABASE_FILE: &str = "./cotacoes.db";

/// Runtime settings of the service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Listen address, e.g. `0.0.0.0:8080`.
    pub bind: String,
    /// External quotation API.
    pub upstream_url: String,
    /// SQLite database file.
    pub database: PathBuf,
    /// Deadline for the upstream call.
    pub fetch_timeout: Duration,
    /// Deadline for open + create table + insert.
    pub persist_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: net::addr("0.0.0.0", SERVICE_PORT),
            upstream_url: UPSTREAM_URL.to_string(),
            database: PathBuf::from(DATABASE_FILE),
            fetch_timeout: FETCH_TIMEOUT,
            persist_timeout: PERSIST_TIMEOUT,
        }
    }
}

/// Shared, read-only handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service settings.
    pub config: Arc<ServiceConfig>,
    /// Client for the upstream API. No client-level timeout; deadlines are per call.
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state with a fresh HTTP client.
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(QuotationError::Transport)?;
        Ok(Self::with_client(config, http))
    }

    /// Build state around an existing HTTP client.
    pub fn with_client(config: ServiceConfig, http: reqwest::Client) -> Self {
        Self {
            config: Arc::new(config),
            http,
        }
    }
}

/// Router exposing the quotation endpoint.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(QUOTATION_PATH, get(handler::get_quotation))
        .with_state(state)
}

/// Serve on `listener` until Ctrl+C.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    info!(
        "Quotation service listening on {} (upstream={}, database={})",
        listener.local_addr()?,
        state.config.upstream_url,
        state.config.database.display()
    );
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Quotation service stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl+C received. Shutting down service..."),
        Err(e) => {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await
        }
    }
}
