use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use portfolio_client::ContactForm;

use crate::{
    template::{IndexTemplate, render},
    web::WebState,
};

/// POST /contact
///
/// Relays the form once. A success clears the form; a failure renders it
/// back untouched next to a toast whose retry button re-submits it.
pub async fn action(
    State(web_state): State<WebState>,
    Form(mut form): Form<ContactForm>,
) -> impl IntoResponse {
    let toast = web_state.client.submit(&mut form).await;

    render(IndexTemplate {
        owner_name: &web_state.config.web.owner_name,
        form: &form,
        toast: Some(&toast),
        pending: &web_state.client.pending_toast(),
    })
}
