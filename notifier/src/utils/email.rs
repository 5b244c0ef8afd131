//! Reminder delivery over SMTP.
//!
//! The transport is built inside each `send` call and dropped when it returns,
//! so pooled connections are released on success and on error alike.

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::{config::SmtpConfig, error::NotifierError, models::notification::DeliveryRequest};

/// Delivers a rendered reminder to its recipients.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, request: DeliveryRequest) -> Result<(), NotifierError>;
}

pub struct SmtpMailer {
    config: SmtpConfig,
    from_address: String,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Self {
        let from_address = if config.username.is_empty() {
            "noreply@weekend-notifier.local".to_string()
        } else {
            config.username.clone()
        };
        Self {
            config,
            from_address,
        }
    }

    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, NotifierError> {
        let transport = if self.config.username.is_empty() {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.config.host)
                .port(self.config.port)
                .build()
        } else {
            let creds = Credentials::new(self.config.username.clone(), self.config.password.clone());
            AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.host)?
                .port(self.config.port)
                .credentials(creds)
                .build()
        };
        Ok(transport)
    }
}

/// Builds the single HTML message addressed to every recipient.
pub fn build_message(from: &str, request: &DeliveryRequest) -> Result<Message, NotifierError> {
    let mut builder = Message::builder()
        .from(parse_mailbox(from)?)
        .subject(request.subject.as_str());
    for recipient in &request.recipients {
        builder = builder.to(parse_mailbox(recipient)?);
    }

    Ok(builder
        .header(ContentType::TEXT_HTML)
        .body(request.html_body.clone())?)
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotifierError> {
    address
        .trim()
        .parse::<Mailbox>()
        .map_err(|source| NotifierError::InvalidAddress {
            address: address.to_string(),
            source,
        })
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, request: DeliveryRequest) -> Result<(), NotifierError> {
        let email = build_message(&self.from_address, &request)?;

        if self.config.skip_send {
            tracing::info!(
                recipients = request.recipients.len(),
                subject = %request.subject,
                "SMTP_SKIP_SEND is set, not sending reminder"
            );
            return Ok(());
        }

        let transport = self.transport()?;
        let response = transport.send(email).await?;
        tracing::debug!(code = %response.code(), "SMTP server accepted reminder");
        Ok(())
    }
}
