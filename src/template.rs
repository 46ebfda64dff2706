use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use portfolio_client::{ContactForm, Toast};

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

/// Renders a template into an HTML response, or a 500 when rendering fails.
pub fn render<T: askama::Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!("Failed to render template. Error: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
        }
    }
}

/// The single portfolio page; the contact section reflects `form` and `toast`.
#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub owner_name: &'a str,
    pub form: &'a ContactForm,
    pub toast: Option<&'a Toast>,
    pub pending: &'a Toast,
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;
