//! SQLite persistence for fetched quotations.
//!
//! Every call opens its own connection to the database file and closes it when done;
//! there is no pool and no shared transaction state. Concurrent writers are
//! serialized by SQLite's file locking. The `cotacoes` table is created lazily on
//! first use.
use std::path::Path;

use chrono::NaiveDateTime;
use log::{debug, warn};
use quotation_common::{Deadline, PersistStep, Quotation, QuotationError, Result};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Connection, FromRow, SqliteConnection};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS cotacoes (\
    id INTEGER PRIMARY KEY AUTOINCREMENT, \
    bid REAL, \
    timestamp DATETIME DEFAULT CURRENT_TIMESTAMP)";
const INSERT_QUOTATION: &str = "INSERT INTO cotacoes (bid) VALUES (?)";
const SELECT_RECENT: &str = "SELECT id, bid, timestamp FROM cotacoes ORDER BY id DESC LIMIT ?";

/// A persisted row. `id` and `timestamp` are assigned by the store.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct StoredQuotation {
    /// Auto-incremented row id.
    pub id: i64,
    /// Bid as stored.
    pub bid: f64,
    /// Insertion time (UTC, second precision).
    pub timestamp: NaiveDateTime,
}

/// Insert `quotation` into the database at `database` under `deadline`.
///
/// Opening the file, creating the table and inserting the row all share the one
/// deadline. If it elapses the in-flight step is dropped and the call fails with the
/// persistence timeout. Closing the connection happens after the guarded work and
/// does not count against the deadline, so a committed row is never reported as failed.
pub async fn persist(database: &Path, quotation: &Quotation, deadline: Deadline) -> Result<()> {
    let mut conn = deadline.run(open(database)).await?;
    let outcome = deadline.run(write_row(&mut conn, quotation.bid)).await;
    close(conn).await;
    outcome
}

/// Newest rows first, at most `limit` of them.
pub async fn recent(database: &Path, limit: u32) -> Result<Vec<StoredQuotation>> {
    let mut conn = open(database).await?;
    let rows = sqlx::query_as::<_, StoredQuotation>(SELECT_RECENT)
        .bind(i64::from(limit))
        .fetch_all(&mut conn)
        .await
        .map_err(|e| failed(PersistStep::Query, e));
    close(conn).await;
    rows
}

async fn write_row(conn: &mut SqliteConnection, bid: f64) -> Result<()> {
    sqlx::query(CREATE_TABLE)
        .execute(&mut *conn)
        .await
        .map_err(|e| failed(PersistStep::CreateTable, e))?;
    let done = sqlx::query(INSERT_QUOTATION)
        .bind(bid)
        .execute(&mut *conn)
        .await
        .map_err(|e| failed(PersistStep::Insert, e))?;
    debug!("Inserted quotation row {} (bid={})", done.last_insert_rowid(), bid);
    Ok(())
}

async fn open(database: &Path) -> Result<SqliteConnection> {
    let options = SqliteConnectOptions::new()
        .filename(database)
        .create_if_missing(true);
    SqliteConnection::connect_with(&options)
        .await
        .map_err(|e| failed(PersistStep::Open, e))
}

async fn close(conn: SqliteConnection) {
    if let Err(e) = conn.close().await {
        warn!("Failed to close the database connection: {}", e);
    }
}

fn failed(step: PersistStep, err: sqlx::Error) -> QuotationError {
    QuotationError::Persistence {
        step,
        reason: err.to_string(),
    }
}
