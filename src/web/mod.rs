use axum::{
    Router,
    response::IntoResponse,
    routing::{get, post},
};
use portfolio_client::ContactClient;

use crate::template::{NotFoundTemplate, render};

pub mod contact;
pub mod index;

/// State shared by the presentation handlers.
#[derive(Clone)]
pub struct WebState {
    pub config: crate::config::Config,
    pub client: ContactClient,
}

pub async fn fallback() -> impl IntoResponse {
    (axum::http::StatusCode::NOT_FOUND, render(NotFoundTemplate))
}

/// Presentation router: the page, its form handler and embedded assets.
pub fn router(web_state: WebState) -> Router {
    Router::new()
        .route("/health", get(crate::routes::health::health))
        .route("/", get(index::page))
        .route("/contact", post(contact::action))
        .route("/static/{*path}", get(crate::assets::serve))
        .fallback(fallback)
        .layer(axum::middleware::from_fn(
            crate::middleware::cache_control_middleware,
        ))
        .with_state(web_state)
}
