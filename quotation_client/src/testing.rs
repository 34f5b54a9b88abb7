//! Test helpers: unique temp paths and stub services.
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tokio::net::TcpListener;

static NEXT_ID: AtomicU32 = AtomicU32::new(0);

/// Path under the system temp dir that no other test uses.
pub(crate) fn temp_path(name: &str) -> PathBuf {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("quotation-client-{}-{}-{}", std::process::id(), id, name))
}

/// Serve `status` + `body` on `GET /cotacao` after `delay`; returns the full URL.
pub(crate) async fn spawn_service(status: StatusCode, body: &'static str, delay: Duration) -> String {
    let app = Router::new().route(
        "/cotacao",
        get(move || async move {
            tokio::time::sleep(delay).await;
            (status, body)
        }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/cotacao", addr)
}

/// HTTP client that ignores proxy settings from the environment.
pub(crate) fn local_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// URL on a port nothing listens on.
pub(crate) async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/cotacao", addr)
}
