/// HTTP serving for the scan report
///
/// The report is computed before the server starts; every request receives
/// the same pre-rendered page, so nothing here touches mutable state.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use log::info;
use tokio::net::TcpListener;

/// Serve the pre-rendered report page on the loopback interface.
///
/// Builds its own runtime so callers stay synchronous. Blocks until the
/// process is terminated.
///
/// # Arguments
///
/// * `html` - The rendered report document
/// * `port` - Listening port
pub fn serve_report(html: String, port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start the server runtime")?;
    runtime.block_on(serve(html, port))
}

async fn serve(html: String, port: u16) -> Result<()> {
    let page = Arc::new(html);
    let app = Router::new().route("/", get(index)).with_state(page);

    let addr = format!("127.0.0.1:{}", port);
    let listener = TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind {}", addr))?;
    info!("Serving report on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")
}

/// The single endpoint: the report page, unchanged for the process lifetime.
async fn index(State(page): State<Arc<String>>) -> Html<String> {
    Html(page.as_ref().clone())
}
