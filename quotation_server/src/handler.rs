//! `GET /cotacao` handler.
//!
//! Fetch, then persist, then answer. The first failing step ends the request with a
//! 500 whose plain-text body is the error message; later steps do not run.
use std::error::Error as _;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{error, info};
use quotation_common::{Deadline, Quotation, QuotationError, Stage};
use thiserror::Error;

use crate::AppState;
use crate::fetcher::fetch_quotation;
use crate::store::persist;

/// Error surfaced to the HTTP caller as `500 text/plain`.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ServiceError(#[from] QuotationError);

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let mut detail = self.0.to_string();
        let mut source = self.0.source();
        while let Some(cause) = source {
            detail.push_str(": ");
            detail.push_str(&cause.to_string());
            source = cause.source();
        }
        error!("Quotation request failed: {}", detail);
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

/// Fetch the current quotation, store it, and return it as JSON.
pub async fn get_quotation(State(state): State<AppState>) -> Result<Json<Quotation>, ServiceError> {
    let config = &state.config;

    let deadline = Deadline::after(Stage::Fetch, config.fetch_timeout);
    let quotation = fetch_quotation(&state.http, &config.upstream_url, deadline).await?;

    let deadline = Deadline::after(Stage::Persist, config.persist_timeout);
    persist(&config.database, &quotation, deadline).await?;

    info!("Quotation served: bid={}", quotation.bid);
    Ok(Json(quotation))
}
