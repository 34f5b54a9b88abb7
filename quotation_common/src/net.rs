//! Shared endpoint constants and default deadlines used by service and requester.
use std::time::Duration;

/// TCP port the quotation service listens on.
pub const SERVICE_PORT: u16 = 8080;
/// Path of the single quotation endpoint.
pub const QUOTATION_PATH: &str = "/cotacao";
/// Third-party API returning the latest USD-BRL quotation.
pub const UPSTREAM_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";

/// Requester → service call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(300);
/// Service → external API call.
pub const FETCH_TIMEOUT: Duration = Duration::from_millis(200);
/// Open, schema creation and insert against the store, taken together.
pub const PERSIST_TIMEOUT: Duration = Duration::from_millis(10);

/// Helper to format an address with a port like "host:port".
pub fn addr(host: &str, port: u16) -> String {
    format!("{}:{}", host, port)
}

/// Default URL of the quotation endpoint on the local service.
pub fn service_url() -> String {
    format!("http://{}{}", addr("localhost", SERVICE_PORT), QUOTATION_PATH)
}
