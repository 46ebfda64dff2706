use async_trait::async_trait;

use crate::ContactEmail;

/// Outbound mail transport.
///
/// The relay only needs a single delivery attempt; retry and availability
/// semantics belong to the implementation behind this trait.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: ContactEmail) -> anyhow::Result<()>;
}
