use axum::{
    Router,
    routing::{get, post},
};

pub mod contact;
pub mod health;

/// State shared by the relay handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub contact_command: portfolio_contact::Command,
}

/// Relay router: health probe plus the contact endpoint, behind CORS.
pub fn router(app_state: AppState) -> anyhow::Result<Router> {
    let cors = crate::middleware::cors_layer(&app_state.config.cors)?;

    Ok(Router::new()
        .route("/health", get(health::health))
        .route("/api/contact", post(contact::action))
        .layer(cors)
        .with_state(app_state))
}
