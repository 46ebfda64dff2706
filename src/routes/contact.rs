use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use portfolio_contact::{ContactSubmission, SUCCESS_MESSAGE};
use serde_json::json;

use crate::{error::AppError, routes::AppState};

/// POST /api/contact
///
/// 400 when a field is missing or the body is unreadable, 500 when the mail
/// transport fails, 200 once the message is handed over.
pub async fn action(
    State(app_state): State<AppState>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = payload?;
    app_state.contact_command.submit_form(input).await?;

    Ok((StatusCode::OK, Json(json!({ "success": SUCCESS_MESSAGE }))))
}
