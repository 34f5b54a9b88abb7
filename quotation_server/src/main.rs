//! Quotation service binary.
//!
//! Listens on `0.0.0.0:8080` (see `--bind`) and answers `GET /cotacao` with the
//! current USD→BRL bid, storing each served quotation in `./cotacoes.db`.
//!
//! Usage example (CLI):
//! ```bash
//! RUST_LOG=debug quotation_server --persist-timeout-ms 50
//! ```
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use clap::Parser;
use quotation_common::Result;
use quotation_server::{AppState, serve};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();
    let config = Args::parse().into_config();
    let listener = TcpListener::bind(&config.bind).await?;
    let state = AppState::new(config)?;
    serve(listener, state).await
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
