use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;

use crate::routes::AppState;

/// Runs the relay process: `POST /api/contact` in front of the mail transport.
pub async fn serve(
    config: crate::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting contact relay...");

    config.validate_relay().map_err(|e| anyhow::anyhow!(e))?;

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    let email_service = crate::email::EmailService::new(&config.email)?;
    let contact_command =
        portfolio_contact::Command::new(Arc::new(email_service), config.email.to_address.to_owned());

    tracing::info!(
        to = %contact_command.to(),
        origins = ?config.cors.allowed_origins,
        "Relay configured"
    );

    let state = AppState {
        config,
        contact_command,
    };

    let app = crate::routes::router(state)?.layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(super::shutdown_signal())
        .await?;

    tracing::info!("Graceful shutdown complete");

    Ok(())
}
