//! Command-line arguments for the quotation requester.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use quotation_client::{RECORD_FILE, RequesterConfig};
use quotation_common::net::{self, REQUEST_TIMEOUT};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Quotation endpoint of the local service.
    #[clap(long, env = "QUOTATION_SERVICE_URL", default_value_t = net::service_url())]
    pub url: String,

    /// File the quotation line is appended to.
    #[clap(long, env = "QUOTATION_OUTPUT", default_value = RECORD_FILE)]
    pub output: PathBuf,

    /// Deadline for the call to the service, in milliseconds.
    #[clap(long, env = "QUOTATION_TIMEOUT_MS", default_value_t = REQUEST_TIMEOUT.as_millis() as u64)]
    pub timeout_ms: u64,
}

impl Args {
    /// Convert parsed flags into the requester config.
    pub fn into_config(self) -> RequesterConfig {
        RequesterConfig {
            url: self.url,
            output: self.output,
            timeout: Duration::from_millis(self.timeout_ms),
        }
    }
}
