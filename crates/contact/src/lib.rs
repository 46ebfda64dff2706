mod command;
mod email;
mod error;
mod mailer;
mod submission;

pub use command::*;
pub use email::*;
pub use error::*;
pub use mailer::*;
pub use submission::*;

/// Acknowledgment returned once the mail transport accepted the message.
pub const SUCCESS_MESSAGE: &str = "Message sent successfully.";
