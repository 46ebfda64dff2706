//! Outbound mail transport using lettre

use crate::config::EmailConfig;
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use portfolio_contact::{ContactEmail, Mailer, SENDER_NAME};
use tracing::{info, warn};

/// SMTP-backed [`Mailer`]
#[derive(Clone)]
pub struct EmailService {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let from = sender(config.from_address())?;

        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address(),
                "Email service initialized with authentication and TLS"
            );
            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());
            // 465 speaks TLS from the first byte, everything else upgrades with STARTTLS
            let builder = if config.smtp_port == 465 {
                AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
            } else {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            };
            builder.port(config.smtp_port).credentials(creds).build()
        };

        Ok(Self { mailer, from })
    }

    pub fn message(&self, email: ContactEmail) -> anyhow::Result<Message> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(email.to.parse()?)
            .subject(email.subject);

        match email.reply_to.parse::<Mailbox>() {
            Ok(reply_to) => builder = builder.reply_to(reply_to),
            Err(e) => warn!(error = %e, reply_to = %email.reply_to, "Skipping unparsable Reply-To"),
        }

        Ok(builder.header(ContentType::TEXT_HTML).body(email.html)?)
    }
}

fn sender(address: &str) -> anyhow::Result<Mailbox> {
    Ok(Mailbox::new(Some(SENDER_NAME.to_owned()), address.parse()?))
}

#[async_trait]
impl Mailer for EmailService {
    async fn send(&self, email: ContactEmail) -> anyhow::Result<()> {
        let to = email.to.clone();
        let message = self.message(email)?;

        self.mailer.send(message).await?;
        info!(to = %to, "Contact email sent");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EmailConfig {
        EmailConfig {
            smtp_host: "localhost".to_string(),
            smtp_port: 1025,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: "relay@portfolio.localhost".to_string(),
            to_address: "owner@portfolio.localhost".to_string(),
        }
    }

    fn email(reply_to: &str) -> ContactEmail {
        ContactEmail {
            to: "owner@portfolio.localhost".to_string(),
            reply_to: reply_to.to_string(),
            subject: "🚀 Internship Opportunity Inquiry from Sam".to_string(),
            html: "<p>Hi</p>".to_string(),
        }
    }

    #[tokio::test]
    async fn test_message_headers() {
        let service = EmailService::new(&config()).unwrap();
        let message = service.message(email("sam@x.com")).unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();

        assert!(formatted.contains("Portfolio Contact Form"));
        assert!(formatted.contains("<relay@portfolio.localhost>"));
        assert!(formatted.contains("To: owner@portfolio.localhost"));
        assert!(formatted.contains("Reply-To: sam@x.com"));
        assert!(formatted.contains("Content-Type: text/html"));
    }

    #[tokio::test]
    async fn test_message_without_valid_reply_to() {
        let service = EmailService::new(&config()).unwrap();
        let message = service.message(email("not an address")).unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();

        assert!(!formatted.contains("Reply-To"));
    }

    #[tokio::test]
    async fn test_invalid_sender_is_rejected() {
        let mut config = config();
        config.from_address = "nope".to_string();

        assert!(EmailService::new(&config).is_err());
    }
}
