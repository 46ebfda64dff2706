use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Contact(#[from] portfolio_contact::Error),

    /// Body missing, not JSON, or carrying non-string fields. Reported the
    /// same way as an empty field.
    #[error("All fields are required.")]
    Payload(#[from] JsonRejection),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Contact(portfolio_contact::Error::Validation(_)) | AppError::Payload(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Contact(portfolio_contact::Error::MailTransport(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Contact(portfolio_contact::Error::MailTransport(detail)) => {
                tracing::error!(error = %detail, "Mail Error");
            }
            AppError::Payload(rejection) => {
                tracing::warn!(error = %rejection.body_text(), "Rejected contact payload");
            }
            AppError::Contact(_) => {}
        }

        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
