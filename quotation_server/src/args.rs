//! Command-line arguments for the quotation service.
//!
//! Every flag can also be set through its `QUOTATION_*` environment variable.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use quotation_common::net::{self, FETCH_TIMEOUT, PERSIST_TIMEOUT, SERVICE_PORT, UPSTREAM_URL};
use quotation_server::{DATABASE_FILE, ServiceConfig};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address the HTTP endpoint binds to.
    #[clap(long, env = "QUOTATION_BIND", default_value_t = net::addr("0.0.0.0", SERVICE_PORT))]
    pub bind: String,

    /// External API returning `{"USDBRL": {"bid": "..."}}`.
    #[clap(long, env = "QUOTATION_UPSTREAM_URL", default_value = UPSTREAM_URL)]
    pub upstream_url: String,

    /// SQLite database file; created on first use.
    #[clap(long, env = "QUOTATION_DATABASE", default_value = DATABASE_FILE)]
    pub database: PathBuf,

    /// Deadline for the upstream call, in milliseconds.
    #[clap(long, env = "QUOTATION_FETCH_TIMEOUT_MS", default_value_t = FETCH_TIMEOUT.as_millis() as u64)]
    pub fetch_timeout_ms: u64,

    /// Deadline for writing to the database, in milliseconds.
    #[clap(long, env = "QUOTATION_PERSIST_TIMEOUT_MS", default_value_t = PERSIST_TIMEOUT.as_millis() as u64)]
    pub persist_timeout_ms: u64,
}

impl Args {
    /// Convert parsed flags into the service config.
    pub fn into_config(self) -> ServiceConfig {
        ServiceConfig {
            bind: self.bind,
            upstream_url: self.upstream_url,
            database: self.database,
            fetch_timeout: Duration::from_millis(self.fetch_timeout_ms),
            persist_timeout: Duration::from_millis(self.persist_timeout_ms),
        }
    }
}
