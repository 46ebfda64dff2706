use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde::Deserialize;
use tracing::{error, info};

use crate::{ClientError, ContactForm, Toast};

pub const CONTACT_PATH: &str = "/api/contact";

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Posts contact submissions to the relay.
///
/// Every call to [`ContactClient::submit`] issues exactly one request; there
/// is no automatic retry and no debouncing.
#[derive(Clone, Debug)]
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    /// `relay_url` is the relay's base URL, e.g. `http://localhost:8080`.
    pub fn new(relay_url: &str) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self::with_client(http, relay_url))
    }

    pub fn with_client(http: reqwest::Client, relay_url: &str) -> Self {
        Self {
            http,
            endpoint: format!("{}{CONTACT_PATH}", relay_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Toast to show while a submission is in flight.
    pub fn pending_toast(&self) -> Toast {
        Toast::pending()
    }

    /// Submits the form and reports the outcome.
    ///
    /// On success the form is cleared; on failure its values are left
    /// untouched so that the retry action can submit them again.
    pub async fn submit(&self, form: &mut ContactForm) -> Toast {
        match self.send(form).await {
            Ok(()) => {
                form.clear();
                Toast::sent()
            }
            Err(err) => {
                error!(error = %err, endpoint = %self.endpoint, "Submission error");
                Toast::failed(err.description())
            }
        }
    }

    /// Sends one request to the relay without touching the form.
    pub async fn send(&self, form: &ContactForm) -> Result<(), ClientError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(form)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!(endpoint = %self.endpoint, "Contact message accepted by relay");
            return Ok(());
        }

        let error = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error);

        Err(ClientError::Rejected { status, error })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = ContactClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8080/api/contact");

        let client = ContactClient::new("https://relay.example.com").unwrap();
        assert_eq!(client.endpoint(), "https://relay.example.com/api/contact");
    }
}
