use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use portfolio_contact::{ContactEmail, Mailer};

/// Records every message handed to it; optionally refuses to deliver.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<ContactEmail>>>,
    fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<ContactEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: ContactEmail) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(email);

        if self.fail {
            anyhow::bail!("535 5.7.8 Username and Password not accepted");
        }

        Ok(())
    }
}

#[allow(dead_code)]
pub fn submission(name: &str, email: &str, message: &str) -> portfolio_contact::ContactSubmission {
    portfolio_contact::ContactSubmission {
        name: name.to_owned(),
        email: email.to_owned(),
        message: message.to_owned(),
    }
}
