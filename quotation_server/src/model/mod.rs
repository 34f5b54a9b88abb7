//! Domain models and decoding helpers for the quotation service.
//!
//! - `api` — the external quotation API envelope and its string-encoded `bid`.
pub mod api;
