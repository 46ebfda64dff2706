use anyhow::Result;
use portfolio_client::ContactClient;
use tower_http::trace::TraceLayer;

use crate::web::WebState;

/// Runs the presentation process: the page and its form handler.
pub async fn web(
    config: crate::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting portfolio site...");

    let host = host_override.unwrap_or(config.web.host.to_owned());
    let port = port_override.unwrap_or(config.web.port);

    let client = ContactClient::new(&config.web.relay_url)?;
    tracing::info!(endpoint = %client.endpoint(), "Contact submissions go to relay");

    let state = WebState { config, client };
    let app = crate::web::router(state).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(super::shutdown_signal())
        .await?;

    tracing::info!("Graceful shutdown complete");

    Ok(())
}
