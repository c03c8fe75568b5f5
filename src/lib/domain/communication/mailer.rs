//! Email delivery port

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

mod errors;
mod message;

pub use errors::MailerError;
pub use message::{DeliveryReceipt, Message};

/// Email delivery service.
///
/// Implementations perform exactly one delivery attempt per call and
/// surface the outcome as an explicit [`Result`]; callers decide what to
/// do with a failure.
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    /// Send an email
    ///
    /// # Arguments
    /// * `message` - The [`Message`] to deliver.
    ///
    /// # Returns
    /// - [`Ok`] with the provider's [`DeliveryReceipt`] on acceptance.
    /// - [`Err`] with a [`MailerError`] describing the failure.
    async fn send(&self, message: &Message) -> Result<DeliveryReceipt, MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    #[async_trait]
    impl Mailer for Mailer {
        async fn send(&self, message: &Message) -> Result<DeliveryReceipt, MailerError>;
    }
}
