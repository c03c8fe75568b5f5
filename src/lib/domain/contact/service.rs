//! Contact relay service

use std::sync::Arc;

use askama::Template;
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use tracing::info;

#[cfg(test)]
use mockall::mock;

use crate::domain::{
    communication::{
        email_address::EmailAddress,
        mailer::{DeliveryReceipt, Mailer, Message},
    },
    contact::{
        emails::notification::ContactNotificationTemplate, errors::RelayError,
        submission::Submission,
    },
};

/// Display name used for the fixed sender mailbox
const SENDER_DISPLAY_NAME: &str = "Portfolio Contact Form";

/// Contact relay service
#[async_trait]
pub trait ContactService: Send + Sync + 'static {
    /// Render a validated submission into a notification email and hand it
    /// to the delivery service.
    ///
    /// # Arguments
    /// * `submission` - The validated [`Submission`] to relay.
    ///
    /// # Returns
    /// - [`Ok`] with the provider's [`DeliveryReceipt`] if the email was accepted.
    /// - [`Err`] with a [`RelayError`] if rendering or delivery failed.
    async fn relay(&self, submission: &Submission) -> Result<DeliveryReceipt, RelayError>;
}

#[cfg(test)]
mock! {
    pub ContactService {}

    #[async_trait]
    impl ContactService for ContactService {
        async fn relay(&self, submission: &Submission) -> Result<DeliveryReceipt, RelayError>;
    }
}

/// Contact relay service implementation
#[derive(Debug, Clone)]
pub struct ContactServiceImpl<M>
where
    M: Mailer,
{
    mailer: Arc<M>,
    sender: EmailAddress,
    recipient: EmailAddress,
}

impl<M> ContactServiceImpl<M>
where
    M: Mailer,
{
    /// Creates a new contact relay service.
    ///
    /// # Arguments
    /// * `mailer` - The delivery service to hand rendered emails to.
    /// * `sender` - The configured sender mailbox.
    /// * `recipient` - The configured destination mailbox.
    pub fn new(mailer: Arc<M>, sender: EmailAddress, recipient: EmailAddress) -> Self {
        Self {
            mailer,
            sender,
            recipient,
        }
    }
}

#[async_trait]
impl<M> ContactService for ContactServiceImpl<M>
where
    M: Mailer,
{
    async fn relay(&self, submission: &Submission) -> Result<DeliveryReceipt, RelayError> {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        let template = ContactNotificationTemplate::new(
            submission.name(),
            submission.email().as_str(),
            &timestamp,
            submission.message(),
        );
        let html = template.render()?;

        let message = Message {
            from: format!("{} <{}>", SENDER_DISPLAY_NAME, self.sender),
            to: self.recipient.clone(),
            reply_to: submission.email().clone(),
            subject: format!("New Contact: {}", submission.name()),
            html,
        };

        let receipt = self.mailer.send(&message).await?;

        info!(id = %receipt.id, "contact email delivered");

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::communication::mailer::{MailerError, MockMailer};

    use super::*;

    fn service(mailer: MockMailer) -> ContactServiceImpl<MockMailer> {
        ContactServiceImpl::new(
            Arc::new(mailer),
            EmailAddress::new("noreply@example.com").expect("valid sender"),
            EmailAddress::new("inbox@example.com").expect("valid recipient"),
        )
    }

    #[tokio::test]
    async fn test_relay_builds_message_from_submission() -> TestResult {
        let submission = Submission::new("Ada", "ada@example.com", "Hello\nWorld")?;

        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .times(1)
            .withf(|message| {
                message.from == "Portfolio Contact Form <noreply@example.com>"
                    && message.to.as_str() == "inbox@example.com"
                    && message.reply_to.as_str() == "ada@example.com"
                    && message.subject == "New Contact: Ada"
                    && message.html.contains("Ada")
                    && message.html.contains("ada@example.com")
                    && message.html.contains("Hello\nWorld")
            })
            .returning(|_| {
                Ok(DeliveryReceipt {
                    id: "abc123".to_string(),
                })
            });

        let receipt = service(mailer).relay(&submission).await?;

        assert_eq!(receipt.id, "abc123");

        Ok(())
    }

    #[tokio::test]
    async fn test_relay_escapes_untrusted_text() -> TestResult {
        let submission = Submission::new("<b>Ada</b>", "ada@example.com", "Hello")?;

        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .times(1)
            .withf(|message| {
                message.html.contains("&lt;b&gt;Ada&lt;/b&gt;")
                    && !message.html.contains("<b>Ada</b>")
            })
            .returning(|_| {
                Ok(DeliveryReceipt {
                    id: "abc123".to_string(),
                })
            });

        service(mailer).relay(&submission).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_relay_forwards_delivery_failure() -> TestResult {
        let submission = Submission::new("Ada", "ada@example.com", "Hello")?;

        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .times(1)
            .returning(|_| Err(MailerError::Rejected("rate limit exceeded".to_string())));

        let result = service(mailer).relay(&submission).await;

        let err = result.unwrap_err();
        assert_eq!(err.details(), "rate limit exceeded");

        Ok(())
    }
}
