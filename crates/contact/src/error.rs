#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// One of name, email or message is absent or empty.
    #[error("All fields are required.")]
    Validation(#[from] validator::ValidationErrors),

    /// The mail transport refused or failed to deliver. The payload carries
    /// the transport detail for logs, never for visitors.
    #[error("Failed to send message.")]
    MailTransport(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
