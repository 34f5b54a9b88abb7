//!
//! Common types and utilities shared by the quotation service and requester.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuotationError` used across the workspace.
//! - `result` — handy `Result<T, QuotationError>` alias.
//! - `quotation` — the `Quotation` value exchanged between service and requester.
//! - `deadline` — per-call deadlines passed into every outbound operation.
//! - `net` — endpoint constants and default deadlines.
#![warn(missing_docs)]
pub mod deadline;
pub mod error;
pub mod net;
pub mod quotation;
pub mod result;

pub use deadline::Deadline;
pub use error::{PersistStep, QuotationError, Stage};
pub use quotation::Quotation;
pub use result::Result;
