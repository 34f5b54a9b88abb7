//! Quotation requester binary — fetches the current USD→BRL bid from the local
//! quotation service and appends `Dólar: <bid>` to `cotacao.txt`.
//!
//! Usage example (CLI):
//! ```bash
//! quotation_client --url http://localhost:8080/cotacao --output ./cotacao.txt
//! ```
//!
//! Exactly one status line is printed. Nothing is written on failure.
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use clap::Parser;
use log::error;
use quotation_client::{http_client, run, status_line};

#[tokio::main]
async fn main() {
    init_logger();
    let config = Args::parse().into_config();

    let outcome = match http_client() {
        Ok(http) => run(&http, &config).await,
        Err(e) => Err(e),
    };
    if let Err(e) = &outcome {
        error!("Quotation request failed: {:?}", e);
    }
    println!("{}", status_line(&outcome));
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
