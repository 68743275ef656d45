//! Drives the form state machine against a transport.

use std::sync::Arc;

use tokio::sync::Mutex;

use super::form::{
    Effect,
    Field,
    FormEvent,
    FormState,
    SubmissionStatus,
};
use super::transport::MailTransport;

/// Owns the contact form state and delivers submissions.
///
/// The state lock is not held across the network call, so a second submit
/// while a message is in flight sees `Sending` and is ignored.
pub struct ContactController {
    /// Form values and submission status.
    state: Mutex<FormState>,
    /// Delivery backend.
    transport: Arc<dyn MailTransport>,
}

impl ContactController {
    #[must_use]
    pub fn new(transport: Arc<dyn MailTransport>) -> Self {
        Self { state: Mutex::new(FormState::new()), transport }
    }

    /// Updates one input.
    pub async fn edit(&self, field: Field, value: impl Into<String>) {
        self.state.lock().await.apply(FormEvent::Edit { field, value: value.into() });
    }

    /// Submits the form and waits for the outcome.
    ///
    /// Returns the status after the attempt. If the submit was ignored
    /// (missing fields, already sending, already sent) the current status is
    /// returned unchanged.
    pub async fn submit(&self) -> SubmissionStatus {
        let effect = self.state.lock().await.apply(FormEvent::Submit);
        let Effect::Send(message) = effect else {
            return self.status().await;
        };

        let outcome = match self.transport.send(&message).await {
            Ok(()) => FormEvent::Delivered,
            Err(failure) => {
                tracing::warn!("Contact submission failed: {}", failure);
                FormEvent::Failed(failure)
            }
        };

        let mut state = self.state.lock().await;
        state.apply(outcome);
        state.status.clone()
    }

    /// Returns to an empty form after a successful delivery.
    pub async fn reset(&self) {
        self.state.lock().await.apply(FormEvent::Reset);
    }

    pub async fn status(&self) -> SubmissionStatus {
        self.state.lock().await.status.clone()
    }

    /// Copy of the current values and status.
    pub async fn snapshot(&self) -> FormState {
        self.state.lock().await.clone()
    }
}

impl std::fmt::Debug for ContactController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactController").field("state", &self.state).finish_non_exhaustive()
    }
}
