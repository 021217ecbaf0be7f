//! Password reset email delivery.
//!
//! Uses SMTP via lettre for delivery with Askama templates. Without SMTP
//! configuration the [`LogMailer`] logs the link instead.

use std::sync::Arc;

use askama::Template;
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart},
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};
use secrecy::ExposeSecret;
use thiserror::Error;
use url::Url;

use crate::config::EmailConfig;
use crate::models::User;

const RESET_SUBJECT: &str = "Reset your password";

/// HTML template for the password reset email.
#[derive(Template)]
#[template(path = "email/password_reset.html")]
struct PasswordResetEmailHtml<'a> {
    reset_url: &'a str,
}

/// Plain text template for the password reset email.
#[derive(Template)]
#[template(path = "email/password_reset.txt")]
struct PasswordResetEmailText<'a> {
    reset_url: &'a str,
}

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("smtp: {0}")]
    Smtp(#[from] SmtpError),

    #[error("could not assemble message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    #[error("not a valid mailbox: {0}")]
    InvalidAddress(String),

    #[error("could not render template: {0}")]
    Template(#[from] askama::Error),
}

/// A password reset email ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordResetEmail {
    /// Recipient address.
    pub to: String,
    /// Link to the storefront page that calls `setPassword`.
    pub reset_url: String,
}

impl PasswordResetEmail {
    /// Build the email for `user`, linking to `base` with the user's global
    /// ID and `token` as query parameters.
    #[must_use]
    pub fn new(base: &Url, user: &User, token: &str) -> Self {
        let mut reset_url = base.clone();
        reset_url
            .query_pairs_mut()
            .append_pair("id", user.id.to_global_id().as_str())
            .append_pair("token", token);

        Self {
            to: user.email.as_str().to_owned(),
            reset_url: reset_url.into(),
        }
    }
}

/// Sends password reset emails.
#[async_trait]
pub trait PasswordResetMailer: Send + Sync + 'static {
    /// Deliver one email.
    async fn send_password_reset(&self, email: &PasswordResetEmail) -> Result<(), EmailError>;
}

/// Send `email` on a background task. Failures are logged, never surfaced to
/// the caller.
pub fn dispatch(mailer: Arc<dyn PasswordResetMailer>, email: PasswordResetEmail) {
    tokio::spawn(async move {
        if let Err(e) = mailer.send_password_reset(&email).await {
            tracing::error!(error = %e, to = %email.to, "Failed to send password reset email");
        }
    });
}

/// Delivers reset emails over an authenticated STARTTLS relay.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailer {
    /// # Errors
    ///
    /// Returns `EmailError::InvalidAddress` when the sender address does not
    /// parse, or `EmailError::Smtp` when the relay host is unusable.
    pub fn new(config: &EmailConfig) -> Result<Self, EmailError> {
        let sender = mailbox(&config.from_address)?;
        let credentials = Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.expose_secret().to_owned(),
        );
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self { transport, sender })
    }
}

fn mailbox(address: &str) -> Result<Mailbox, EmailError> {
    address
        .parse()
        .map_err(|_| EmailError::InvalidAddress(address.to_owned()))
}

#[async_trait]
impl PasswordResetMailer for SmtpMailer {
    async fn send_password_reset(&self, email: &PasswordResetEmail) -> Result<(), EmailError> {
        let reset_url = email.reset_url.as_str();
        let body = MultiPart::alternative_plain_html(
            PasswordResetEmailText { reset_url }.render()?,
            PasswordResetEmailHtml { reset_url }.render()?,
        );

        let message = Message::builder()
            .from(self.sender.clone())
            .to(mailbox(&email.to)?)
            .subject(RESET_SUBJECT)
            .multipart(body)?;
        self.transport.send(message).await?;

        tracing::info!(to = %email.to, "Password reset email sent");
        Ok(())
    }
}

/// Mailer that only logs. Used when SMTP is not configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailer;

#[async_trait]
impl PasswordResetMailer for LogMailer {
    async fn send_password_reset(&self, email: &PasswordResetEmail) -> Result<(), EmailError> {
        tracing::info!(to = %email.to, reset_url = %email.reset_url, "Password reset email (not sent, SMTP disabled)");
        Ok(())
    }
}
