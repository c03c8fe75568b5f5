//! SMTP email delivery implementation

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use lettre::{
    message::SinglePart,
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    SmtpTransport, Transport,
};

use crate::domain::communication::mailer::{DeliveryReceipt, Mailer, MailerError, Message};

/// SMTP configuration
#[derive(Clone, Default, Debug, Parser)]
pub struct SmtpConfig {
    /// The SMTP host
    #[clap(long, env = "SMTP_HOST")]
    pub host: String,

    /// The SMTP port
    #[clap(long, env = "SMTP_PORT")]
    pub port: u16,

    /// The SMTP username
    #[clap(long, env = "SMTP_USER")]
    pub username: String,

    /// The SMTP password
    #[clap(long, env = "SMTP_PASSWORD")]
    pub password: String,

    /// The sender mailbox, used as the From address
    #[clap(long, env = "FROM_EMAIL")]
    pub sender: String,

    /// The destination mailbox submissions are forwarded to
    #[clap(long, env = "TO_EMAIL")]
    pub recipient: String,

    /// Verify the TLS certificate
    #[clap(long, env = "SMTP_VERIFY_TLS", default_value = "true")]
    pub verify_tls: bool,

    /// Enable STARTTLS (TLS upgrade on connection)
    #[clap(long, env = "SMTP_STARTTLS", default_value = "true")]
    pub starttls: bool,
}

/// SMTP mailer
#[derive(Debug, Default, Clone)]
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    /// Create a new SMTP mailer
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Build the SMTP transport from the configuration
    pub fn transport(&self) -> Result<SmtpTransport> {
        let creds = Credentials::new(self.config.username.clone(), self.config.password.clone());

        let relay = if self.config.starttls {
            SmtpTransport::starttls_relay(&self.config.host)?
        } else {
            SmtpTransport::relay(&self.config.host)?
        };

        Ok(relay
            .credentials(creds)
            .port(self.config.port)
            .tls(Tls::Opportunistic(
                TlsParameters::builder(self.config.host.to_string())
                    .dangerous_accept_invalid_certs(!self.config.verify_tls)
                    .build()?,
            ))
            .build())
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &Message) -> Result<DeliveryReceipt, MailerError> {
        let email = lettre::Message::builder()
            .from(message.from.parse()?)
            .to(message.to.as_str().parse()?)
            .reply_to(message.reply_to.as_str().parse()?)
            .subject(message.subject.clone())
            .singlepart(SinglePart::html(message.html.clone()))?;

        let response = self
            .transport()?
            .send(&email)
            .map_err(|e| MailerError::Rejected(e.to_string()))?;

        // The server's acceptance line doubles as the opaque receipt id.
        let id = response.message().collect::<Vec<&str>>().join(" ");

        Ok(DeliveryReceipt { id })
    }
}
