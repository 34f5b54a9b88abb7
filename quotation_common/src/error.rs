//! Error types shared between service and requester.
//!
//! `QuotationError` covers the four failure classes of an exchange (deadline
//! exceeded, transport, decode, persistence) plus the local I/O failures of
//! each binary. Every variant is terminal for the request that produced it;
//! its `Display` form is what ends up in an HTTP 500 body or on the console.
use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

use strum_macros::Display;
use thiserror::Error;

/// Outbound call guarded by a [`crate::Deadline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Stage {
    /// Requester calling the local service.
    #[strum(to_string = "requesting the quotation")]
    Request,
    /// Service calling the external quotation API.
    #[strum(to_string = "fetching the quotation")]
    Fetch,
    /// Service writing the quotation to its store.
    #[strum(to_string = "persisting the quotation")]
    Persist,
}

/// Step of the persistence sequence that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PersistStep {
    #[allow(missing_docs)]
    #[strum(to_string = "open the database")]
    Open,
    #[allow(missing_docs)]
    #[strum(to_string = "create the table")]
    CreateTable,
    #[allow(missing_docs)]
    #[strum(to_string = "insert the quotation")]
    Insert,
    #[allow(missing_docs)]
    #[strum(to_string = "read the quotations")]
    Query,
}

/// Unified error type shared by service and requester.
#[derive(Error, Debug)]
pub enum QuotationError {
    /// The call's deadline elapsed before it started or completed.
    #[error("timeout while {0}")]
    Timeout(Stage),

    /// Connection-level failure. The message stays generic; the source keeps the detail.
    #[error("failed to fetch the quotation")]
    Transport(#[source] reqwest::Error),

    /// Payload is not valid JSON or does not have the expected shape.
    #[error("failed to decode the quotation response: {0}")]
    Decode(String),

    /// The `bid` field is absent or not encoded as a string.
    #[error("failed to decode the quotation response: bid not found in the expected format")]
    MissingBid,

    /// The `bid` string is not a floating-point number.
    #[error("failed to decode the quotation response: invalid bid: {0}")]
    InvalidBid(#[from] ParseFloatError),

    /// Open, schema creation or insert against the store failed.
    #[error("failed to {step}: {reason}")]
    Persistence {
        /// Which step failed.
        step: PersistStep,
        /// Driver message.
        reason: String,
    },

    /// Appending the record line to the requester's file failed.
    #[error("failed to save the quotation to {}: {source}", .path.display())]
    Record {
        /// Target file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// I/O error originating from the standard library or sockets.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl QuotationError {
    /// Returns `true` for the deadline-exceeded class.
    pub fn is_timeout(&self) -> bool {
        matches!(self, QuotationError::Timeout(_))
    }
}

impl From<serde_json::Error> for QuotationError {
    fn from(err: serde_json::Error) -> Self {
        QuotationError::Decode(err.to_string())
    }
}
