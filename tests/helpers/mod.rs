//! Shared fixtures for driving the relay and site routers in-process.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use portfolio::{AppState, Config};
use portfolio_contact::{ContactEmail, Mailer};

pub const OWNER: &str = "owner@portfolio.localhost";
pub const ALLOWED_ORIGIN: &str = "http://localhost:5173";

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
            anyhow::bail!("connection to smtp relay timed out");
        }

        Ok(())
    }
}

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.email.smtp_username = OWNER.to_owned();
    config.email.to_address = OWNER.to_owned();
    config.cors.allowed_origins = vec![ALLOWED_ORIGIN.to_owned()];
    config
}

/// Relay router wired to `mailer`.
pub fn relay(mailer: &RecordingMailer) -> Router {
    let state = AppState {
        config: test_config(),
        contact_command: portfolio_contact::Command::new(Arc::new(mailer.clone()), OWNER),
    };

    portfolio::routes::router(state).expect("valid relay router")
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn(router: Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok(format!("http://{addr}"))
}
