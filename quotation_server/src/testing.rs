//! Test helpers: unique temp paths and stub HTTP upstreams.
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use axum::Router;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Connection, SqliteConnection};
use axum::routing::get;
use tokio::net::TcpListener;

static NEXT_ID: AtomicU32 = AtomicU32::new(0);

/// Path under the system temp dir that no other test uses.
pub(crate) fn temp_path(name: &str) -> PathBuf {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("quotation-server-{}-{}-{}", std::process::id(), id, name))
}

/// Serve `body` on `GET /json/last/USD-BRL` after `delay`; returns the full URL.
pub(crate) async fn spawn_upstream(body: &'static str, delay: Duration) -> String {
    let app = Router::new().route(
        "/json/last/USD-BRL",
        get(move || async move {
            tokio::time::sleep(delay).await;
            body
        }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/json/last/USD-BRL", addr)
}

/// URL on a port nothing listens on.
pub(crate) async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/json/last/USD-BRL", addr)
}

/// HTTP client that ignores proxy settings from the environment.
pub(crate) fn local_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Create the database at `database` and run `statements` against it.
pub(crate) async fn seed(database: &Path, statements: &[&str]) {
    let options = SqliteConnectOptions::new()
        .filename(database)
        .create_if_missing(true);
    let mut conn = SqliteConnection::connect_with(&options).await.unwrap();
    for statement in statements {
        sqlx::query(statement).execute(&mut conn).await.unwrap();
    }
    conn.close().await.unwrap();
}
