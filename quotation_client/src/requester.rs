//! The single outbound call from the requester to the quotation service.
use log::debug;
use quotation_common::{Deadline, Quotation, QuotationError, Result};

/// Ask the service at `url` for the current quotation under `deadline`.
///
/// If the deadline has already elapsed the request is never sent. Sending and
/// reading the body both count against it. The body must be JSON with a numeric
/// `bid`; any other body, including the service's plain-text error messages, is a
/// decode failure.
pub async fn fetch_quotation(
    http: &reqwest::Client,
    url: &str,
    deadline: Deadline,
) -> Result<Quotation> {
    let body = deadline
        .run(async {
            let response = http.get(url).send().await.map_err(QuotationError::Transport)?;
            debug!("Service {} answered {}", url, response.status());
            response.bytes().await.map_err(QuotationError::Transport)
        })
        .await?;
    Ok(serde_json::from_slice::<Quotation>(&body)?)
}
