//! Quotation payload exchanged between the service and the requester.
//!
//! On the wire it is `{"bid": <number>}`; the requester turns it into a record line.
use serde::{Deserialize, Serialize};

/// Purchase-side USD→BRL rate for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    /// BRL per USD.
    pub bid: f64,
}

impl Quotation {
    /// Create a quotation from a bid value.
    pub fn new(bid: f64) -> Self {
        Self { bid }
    }

    /// Line appended to the requester's record file.
    pub fn record_line(&self) -> String {
        format!("Dólar: {:.2}\n", self.bid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bid_object() {
        let json = serde_json::to_string(&Quotation::new(5.25)).unwrap();
        assert_eq!(json, r#"{"bid":5.25}"#);
    }

    #[test]
    fn rejects_payload_without_numeric_bid() {
        assert!(serde_json::from_str::<Quotation>(r#"{"ask":5.3}"#).is_err());
        assert!(serde_json::from_str::<Quotation>(r#"{"bid":"5.25"}"#).is_err());
        assert!(serde_json::from_str::<Quotation>("timeout while fetching the quotation").is_err());
    }

    #[test]
    fn record_line_rounds_to_two_decimals() {
        assert_eq!(Quotation::new(5.25).record_line(), "Dólar: 5.25\n");
        assert_eq!(Quotation::new(4.9876).record_line(), "Dólar: 4.99\n");
    }
}
