use crate::error::{Error, Result};
use axum::{routing::get, Router};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::net::SocketAddr;

/// Installs the Prometheus recorder as the global metrics sink. Duration
/// observations render as a summary (quantiles plus `_sum` and `_count`).
pub fn setup_metrics_recorder() -> Result<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| Error::Metrics(e.to_string()))
}

/// Build a Router for the exposition endpoint.
pub fn router(handle: PrometheusHandle) -> Router {
    Router::new().route(
        "/metrics",
        get(move || std::future::ready(handle.render())),
    )
}

/// Bind the exposition endpoint and serve it in a background task. The bind
/// happens before returning so that an occupied port fails startup instead of
/// surfacing later inside the scrape loop.
pub async fn start(port: u16) -> Result<()> {
    let handle = setup_metrics_recorder()?;
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    log::info!("Metrics endpoint listening on http://{}/metrics", addr);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router(handle)).await {
            log::error!("Metrics endpoint terminated: {}", e);
        }
    });

    Ok(())
}
