//! Outbound call to the external quotation API.
use log::debug;
use quotation_common::{Deadline, Quotation, QuotationError, Result};

use crate::model::api::decode_api_quotation;

/// Fetch the latest quotation from `url` under `deadline`.
///
/// Sending the request and reading the body both count against the deadline;
/// decoding happens after the body is fully in memory. The response status is
/// not inspected: an error page fails in the decode step.
pub async fn fetch_quotation(
    http: &reqwest::Client,
    url: &str,
    deadline: Deadline,
) -> Result<Quotation> {
    let body = deadline
        .run(async {
            let response = http.get(url).send().await.map_err(QuotationError::Transport)?;
            debug!("Upstream {} answered {}", url, response.status());
            response.bytes().await.map_err(QuotationError::Transport)
        })
        .await?;
    decode_api_quotation(&body)
}
