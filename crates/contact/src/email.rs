use askama::Template;

use crate::ContactSubmission;

/// Display name used on every relayed message.
pub const SENDER_NAME: &str = "Portfolio Contact Form";

/// Body of the relayed message.
///
/// Rendered without escaping: visitor input lands in the HTML verbatim.
#[derive(Template)]
#[template(path = "emails/contact.html", escape = "none")]
struct ContactHtmlTemplate<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

/// A composed message, ready to hand to a [`crate::Mailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail {
    pub to: String,
    /// The visitor's address, used as `Reply-To`.
    pub reply_to: String,
    pub subject: String,
    pub html: String,
}

impl ContactEmail {
    pub fn compose(
        submission: &ContactSubmission,
        to: impl Into<String>,
    ) -> Result<Self, askama::Error> {
        let html = ContactHtmlTemplate {
            name: &submission.name,
            email: &submission.email,
            message: &submission.message,
        }
        .render()?;

        Ok(Self {
            to: to.into(),
            reply_to: submission.email.to_owned(),
            subject: subject(&submission.name),
            html,
        })
    }
}

pub fn subject(name: &str) -> String {
    format!("🚀 Internship Opportunity Inquiry from {name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_owned(),
            email: "sam@x.com".to_owned(),
            message: message.to_owned(),
        }
    }

    #[test]
    fn test_compose_uses_recipient_and_name() {
        let email = ContactEmail::compose(&submission("Sam", "Hi"), "owner@example.com").unwrap();

        assert_eq!(email.to, "owner@example.com");
        assert_eq!(email.reply_to, "sam@x.com");
        assert_eq!(email.subject, "🚀 Internship Opportunity Inquiry from Sam");
        assert!(email.html.contains("<p><strong>Name:</strong> Sam</p>"));
        assert!(email.html.contains("<p><strong>Email:</strong> sam@x.com</p>"));
        assert!(email.html.contains("<p>Hi</p>"));
        assert!(email.html.contains("sent via your portfolio contact form"));
    }

    #[test]
    fn test_compose_keeps_markup_verbatim() {
        let email = ContactEmail::compose(
            &submission("<b>Sam</b>", "<a href=\"x\">link</a> & more"),
            "owner@example.com",
        )
        .unwrap();

        assert!(email.html.contains("<b>Sam</b>"));
        assert!(email.html.contains("<a href=\"x\">link</a> & more"));
        assert!(!email.html.contains("&lt;"));
    }
}
