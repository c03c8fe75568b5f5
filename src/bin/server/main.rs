#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Contact-form relay server

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use contact_relay::{
    domain::{communication::email_address::EmailAddress, contact::service::ContactServiceImpl},
    infrastructure::{
        email::smtp::{SmtpConfig, SmtpMailer},
        http::{
            state::{AppConfig, AppState},
            HttpServer, HttpServerConfig,
        },
    },
};

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The SMTP delivery configuration
    #[clap(flatten)]
    pub smtp: SmtpConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; deployments configure the process directly.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let sender = EmailAddress::new(&args.smtp.sender)?;
    let recipient = EmailAddress::new(&args.smtp.recipient)?;

    let mailer = Arc::new(SmtpMailer::new(args.smtp.clone()));
    let contact = ContactServiceImpl::new(mailer, sender, recipient);

    let config = AppConfig {
        environment: args.server.environment.clone(),
    };
    let state = AppState::new(config, contact);

    HttpServer::new(state, args.server).await?.run().await
}
