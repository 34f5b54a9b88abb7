//! Per-call deadlines.
//!
//! A [`Deadline`] is created by the caller right before an outbound operation and
//! passed into it. The operation either finishes before the deadline or
//! its future is dropped and the call fails with [`QuotationError::Timeout`] for the
//! deadline's [`Stage`]. Nothing is kept from a call that ran out of time.
//!
//! Time is measured on `tokio::time::Instant`, which is monotonic and follows the
//! runtime clock (so paused-clock tests work as well).
use std::future::Future;
use std::time::Duration;

use tokio::time::{Instant, timeout_at};

use crate::error::{QuotationError, Stage};
use crate::result::Result;

/// Point in time after which an outbound call is abandoned.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    stage: Stage,
    expires_at: Instant,
}

impl Deadline {
    /// Deadline `budget` from now for the given stage.
    pub fn after(stage: Stage, budget: Duration) -> Self {
        Self {
            stage,
            expires_at: Instant::now() + budget,
        }
    }

    /// Time left, zero once elapsed.
    pub fn remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }

    /// Check if the deadline has already elapsed.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    /// Fail with the timeout class if the deadline elapsed before the call started.
    pub fn ensure_open(&self) -> Result<()> {
        if self.is_expired() {
            return Err(QuotationError::Timeout(self.stage));
        }
        Ok(())
    }

    /// Drive `call` to completion unless the deadline elapses first.
    pub async fn run<T, F>(&self, call: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        self.ensure_open()?;
        match timeout_at(self.expires_at, call).await {
            Ok(outcome) => outcome,
            Err(_) => Err(QuotationError::Timeout(self.stage)),
        }
    }
}
