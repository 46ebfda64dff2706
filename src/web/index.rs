use axum::{extract::State, response::IntoResponse};
use portfolio_client::ContactForm;

use crate::{
    template::{IndexTemplate, render},
    web::WebState,
};

pub async fn page(State(web_state): State<WebState>) -> impl IntoResponse {
    render(IndexTemplate {
        owner_name: &web_state.config.web.owner_name,
        form: &ContactForm::default(),
        toast: None,
        pending: &web_state.client.pending_toast(),
    })
}
