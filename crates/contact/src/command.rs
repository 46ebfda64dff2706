use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::{ContactEmail, ContactSubmission, Error, Mailer};

/// Validates a submission and forwards it to the mail transport.
#[derive(Clone)]
pub struct Command {
    mailer: Arc<dyn Mailer>,
    to: String,
}

impl Command {
    pub fn new(mailer: Arc<dyn Mailer>, to: impl Into<String>) -> Self {
        Self {
            mailer,
            to: to.into(),
        }
    }

    /// Recipient of every relayed message.
    pub fn to(&self) -> &str {
        &self.to
    }

    pub async fn submit_form(&self, input: ContactSubmission) -> crate::Result<()> {
        input.validate()?;

        let email = ContactEmail::compose(&input, &self.to)
            .map_err(|e| Error::MailTransport(format!("failed to render email: {e}")))?;

        self.mailer
            .send(email)
            .await
            .map_err(|e| Error::MailTransport(format!("{e:#}")))?;

        info!(to = %self.to, from_name = %input.name, "Contact message relayed");

        Ok(())
    }
}
