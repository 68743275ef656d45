//! Contact form: state machine, delivery transports, and the controller
//! tying them together.
/// Async driver over a transport
pub mod controller;
/// Form values and submission status reducer
pub mod form;
/// Mail delivery seam and the EmailJS client
pub mod transport;

pub use controller::ContactController;
pub use form::{
    ContactForm,
    Effect,
    Field,
    FormEvent,
    FormState,
    SubmissionStatus,
};
pub use transport::{
    EMAILJS_SEND_PATH,
    EmailJsTransport,
    MailTransport,
    NotConfiguredTransport,
    SubmissionFailure,
    transport_from_settings,
};
