//! Quotation requester — asks the local service for the current USD→BRL bid and
//! appends it to a text record.
//!
//! - `requester` — the one bounded call to the service.
//! - `record` — append-only record file.
//!
//! [`run`] chains them: on any failure nothing is written.
#![warn(missing_docs)]
use std::path::PathBuf;
use std::time::Duration;

use log::info;
use quotation_common::net::{self, REQUEST_TIMEOUT};
use quotation_common::{Deadline, Quotation, QuotationError, Result, Stage};

pub mod record;
pub mod requester;

#[cfg(test)]
pub(crate) mod testing;

/// Record file used when none is configured.
pub const RECORD_FILE: &str = "cotacao.txt";
/// Status line printed after a successful run.
pub const SAVED: &str = "Quotation saved!";

/// Runtime settings of the requester.
#[derive(Debug, Clone)]
pub struct RequesterConfig {
    /// Quotation endpoint of the service.
    pub url: String,
    /// Record file the line is appended to.
    pub output: PathBuf,
    /// Deadline for the call to the service.
    pub timeout: Duration,
}

impl Default for RequesterConfig {
    fn default() -> Self {
        Self {
            url: net::service_url(),
            output: PathBuf::from(RECORD_FILE),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

/// Fetch one quotation and append it to the record file.
///
/// The deadline starts when this is called and covers the service call only.
pub async fn run(http: &reqwest::Client, config: &RequesterConfig) -> Result<Quotation> {
    let deadline = Deadline::after(Stage::Request, config.timeout);
    let quotation = requester::fetch_quotation(http, &config.url, deadline).await?;
    record::append_record(&config.output, &quotation)?;
    info!("Appended bid {} to {}", quotation.bid, config.output.display());
    Ok(quotation)
}

/// Default HTTP client for the requester. No client-level timeout; the deadline is per call.
pub fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .build()
        .map_err(QuotationError::Transport)
}

/// Human-readable status line for the outcome of [`run`].
pub fn status_line(outcome: &Result<Quotation>) -> String {
    match outcome {
        Ok(_) => SAVED.to_string(),
        Err(e) => e.to_string(),
    }
}
