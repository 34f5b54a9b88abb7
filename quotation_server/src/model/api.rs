//! External quotation API payload.
//!
//! The API answers with `{"USDBRL": {"bid": "5.2571", ...}}`: the quotation sits one
//! level under a fixed pair key and every numeric field is sent as a JSON string.
//! Only `bid` is looked at. The inner object is decoded into a generic map, `bid`
//! is checked for presence and string type, and the string is then parsed as `f64`.
use quotation_common::{Quotation, QuotationError, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Field holding the purchase-side rate.
pub const BID_FIELD: &str = "bid";

#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    #[serde(rename = "USDBRL")]
    pair: Map<String, Value>,
}

/// Decode an API response body into a [`Quotation`].
pub fn decode_api_quotation(body: &[u8]) -> Result<Quotation> {
    let envelope: ApiEnvelope = serde_json::from_slice(body)?;
    parse_bid(&envelope.pair).map(Quotation::new)
}

/// Extract the string-encoded `bid` from the inner quotation object.
pub fn parse_bid(fields: &Map<String, Value>) -> Result<f64> {
    let raw = fields
        .get(BID_FIELD)
        .and_then(Value::as_str)
        .ok_or(QuotationError::MissingBid)?;
    let bid = raw.parse::<f64>()?;
    if !bid.is_finite() {
        return Err(QuotationError::Decode(format!("bid is not a finite number: {raw}")));
    }
    Ok(bid)
}
