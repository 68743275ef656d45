//! Delivery of contact messages.
//!
//! [`MailTransport`] is the seam between the form state machine and the
//! network. [`EmailJsTransport`] talks to the EmailJS REST API;
//! [`NotConfiguredTransport`] stands in when no credentials are set.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client,
    StatusCode,
};
use serde::Serialize;
use thiserror::Error;

use super::form::ContactForm;
use crate::config::EmailSettings;

/// Path of the EmailJS send endpoint, relative to the API base URL.
pub const EMAILJS_SEND_PATH: &str = "/api/v1.0/email/send";

/// Why a submission did not reach the recipient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionFailure {
    #[error("Email delivery is not configured")]
    NotConfigured,

    #[error("Could not reach the email service: {0}")]
    Network(String),

    #[error("Email service rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Failed to build the HTTP client: {0}")]
    ClientBuild(String),
}

/// Sends a completed contact form.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Delivers one message.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionFailure`] when the message was not accepted.
    async fn send(&self, form: &ContactForm) -> Result<(), SubmissionFailure>;
}

/// Transport used when no email settings are present. Every send fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotConfiguredTransport;

#[async_trait]
impl MailTransport for NotConfiguredTransport {
    async fn send(&self, _form: &ContactForm) -> Result<(), SubmissionFailure> {
        tracing::warn!("Contact submission dropped: email delivery is not configured");
        Err(SubmissionFailure::NotConfigured)
    }
}

/// Template variables filled in by the EmailJS template.
#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    /// Sender name or company.
    name: &'a str,
    /// Reply-to address.
    email: &'a str,
    /// Message body.
    message: &'a str,
}

/// Body of `POST /api/v1.0/email/send`.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    /// EmailJS service id.
    service_id: &'a str,
    /// EmailJS template id.
    template_id: &'a str,
    /// Account public key.
    user_id: &'a str,
    /// Form fields.
    template_params: TemplateParams<'a>,
}

/// EmailJS-backed transport.
#[derive(Debug, Clone)]
pub struct EmailJsTransport {
    /// Full URL of the send endpoint.
    send_url: String,
    /// EmailJS service id.
    service_id: String,
    /// EmailJS template id.
    template_id: String,
    /// Account public key.
    public_key: String,
    /// HTTP client configured with the request timeout.
    client: Client,
}

impl EmailJsTransport {
    /// Builds a transport from validated email settings.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionFailure::ClientBuild`] when the HTTP client cannot be built.
    pub fn new(settings: &EmailSettings) -> Result<Self, SubmissionFailure> {
        let client = Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .build()
            .map_err(|err| SubmissionFailure::ClientBuild(err.to_string()))?;
        let base = settings.endpoint.trim_end_matches('/');

        Ok(Self {
            send_url: format!("{base}{EMAILJS_SEND_PATH}"),
            service_id: settings.service_id.clone(),
            template_id: settings.template_id.clone(),
            public_key: settings.public_key.clone(),
            client,
        })
    }

    #[must_use]
    pub fn send_url(&self) -> &str {
        &self.send_url
    }
}

#[async_trait]
impl MailTransport for EmailJsTransport {
    async fn send(&self, form: &ContactForm) -> Result<(), SubmissionFailure> {
        let request = SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: TemplateParams {
                name: &form.name,
                email: &form.email,
                message: &form.message,
            },
        };

        tracing::debug!("Sending contact message to {}", self.send_url);
        let response = self
            .client
            .post(&self.send_url)
            .json(&request)
            .send()
            .await
            .map_err(|err| SubmissionFailure::Network(err.to_string()))?;

        match response.status() {
            StatusCode::OK => {
                tracing::info!("Contact message delivered");
                Ok(())
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                tracing::warn!("Contact message rejected with status {}: {}", status, body);
                Err(SubmissionFailure::Rejected { status: status.as_u16(), body })
            }
        }
    }
}

/// Picks the transport for the configured email settings.
///
/// # Errors
///
/// Returns [`SubmissionFailure::ClientBuild`] when the HTTP client cannot be built.
pub fn transport_from_settings(
    settings: Option<&EmailSettings>,
) -> Result<Box<dyn MailTransport>, SubmissionFailure> {
    match settings {
        Some(settings) => Ok(Box::new(EmailJsTransport::new(settings)?)),
        None => {
            tracing::debug!("No email settings, contact submissions will fail");
            Ok(Box::new(NotConfiguredTransport))
        }
    }
}
