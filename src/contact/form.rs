//! Contact form state machine.
//!
//! ```text
//! idle --submit--> sending --delivered--> success --reset--> idle
//!                     |
//!                     +-----failed-----> error --submit--> sending
//! ```
//!
//! [`FormState::apply`] is the only way to change state. It is synchronous;
//! when a submission should go out it returns [`Effect::Send`] with the
//! message to deliver, and the caller reports the outcome back as
//! [`FormEvent::Delivered`] or [`FormEvent::Failed`].

use super::transport::SubmissionFailure;
use crate::content::ContactButtons;

/// The three contact inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Inputs in form order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Input `name` attribute, also the template variable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// Values of the contact inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), email: email.into(), message: message.into() }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Fields that are empty after trimming whitespace.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL.into_iter().filter(|field| self.get(*field).trim().is_empty()).collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Where a submission stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error(SubmissionFailure),
}

impl SubmissionStatus {
    /// The submit button is disabled while a message is in flight.
    #[must_use]
    pub const fn is_submit_disabled(&self) -> bool {
        matches!(self, Self::Sending)
    }

    /// The form is replaced by the confirmation panel after a delivery.
    #[must_use]
    pub const fn shows_form(&self) -> bool {
        !matches!(self, Self::Success)
    }

    /// The send icon is shown next to the label when not sending.
    #[must_use]
    pub const fn shows_send_icon(&self) -> bool {
        matches!(self, Self::Idle | Self::Error(_))
    }

    /// Label of the submit button.
    #[must_use]
    pub fn button_label<'a>(&self, buttons: &'a ContactButtons) -> &'a str {
        match self {
            Self::Sending => &buttons.sending,
            _ => &buttons.send,
        }
    }

    /// Error banner text, if any.
    #[must_use]
    pub fn error_message<'a>(&self, buttons: &'a ContactButtons) -> Option<&'a str> {
        match self {
            Self::Error(_) => Some(&buttons.error),
            _ => None,
        }
    }
}

/// Input to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Edit { field: Field, value: String },
    Submit,
    Delivered,
    Failed(SubmissionFailure),
    Reset,
}

/// What the caller must do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed, or nothing to do.
    None,
    /// Deliver this snapshot and report the outcome.
    Send(ContactForm),
}

/// Form values plus submission status.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub form: ContactForm,
    pub status: SubmissionStatus,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event.
    ///
    /// Events that make no sense in the current status are ignored: edits
    /// while sending or after success, a submit while sending or with an
    /// empty field, an outcome when nothing is in flight, and a reset that
    /// does not follow a success.
    pub fn apply(&mut self, event: FormEvent) -> Effect {
        let editable = matches!(self.status, SubmissionStatus::Idle | SubmissionStatus::Error(_));
        let sending = matches!(self.status, SubmissionStatus::Sending);

        match event {
            FormEvent::Edit { field, value } if editable => {
                self.form.set(field, value);
            }
            FormEvent::Submit if editable => {
                let missing = self.form.missing_fields();
                if !missing.is_empty() {
                    tracing::debug!("Submit blocked, required fields empty: {:?}", missing);
                    return Effect::None;
                }
                self.status = SubmissionStatus::Sending;
                return Effect::Send(self.form.clone());
            }
            FormEvent::Delivered if sending => {
                self.form.clear();
                self.status = SubmissionStatus::Success;
            }
            FormEvent::Failed(failure) if sending => {
                self.status = SubmissionStatus::Error(failure);
            }
            FormEvent::Reset if matches!(self.status, SubmissionStatus::Success) => {
                self.form.clear();
                self.status = SubmissionStatus::Idle;
            }
            event => {
                tracing::trace!("Ignoring {:?} while {:?}", event, self.status);
            }
        }
        Effect::None
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::{
        fixture,
        rstest,
    };

    use super::*;
    use crate::test_utils::catalog;
    use crate::types::Locale;

    #[fixture]
    fn filled() -> FormState {
        FormState {
            form: ContactForm::new("Ana", "ana@acme.io", "Need a landing page"),
            status: SubmissionStatus::Idle,
        }
    }

    fn rejected() -> SubmissionFailure {
        SubmissionFailure::Rejected { status: 400, body: "bad request".to_string() }
    }

    #[rstest]
    fn submit_moves_to_sending(mut filled: FormState) {
        let effect = filled.apply(FormEvent::Submit);

        assert_that!(effect, eq(&Effect::Send(filled.form.clone())));
        assert_that!(filled.status, eq(&SubmissionStatus::Sending));
    }

    #[rstest]
    fn delivered_moves_to_success_and_clears(mut filled: FormState) {
        filled.apply(FormEvent::Submit);

        filled.apply(FormEvent::Delivered);

        assert_that!(filled.status, eq(&SubmissionStatus::Success));
        assert_that!(filled.form, eq(&ContactForm::default()));
    }

    #[rstest]
    fn reset_after_success_returns_to_idle(mut filled: FormState) {
        filled.apply(FormEvent::Submit);
        filled.apply(FormEvent::Delivered);

        filled.apply(FormEvent::Reset);

        assert_that!(filled, eq(&FormState::new()));
    }

    #[rstest]
    fn failure_keeps_fields(mut filled: FormState) {
        let before = filled.form.clone();
        filled.apply(FormEvent::Submit);

        filled.apply(FormEvent::Failed(rejected()));

        assert_that!(filled.status, eq(&SubmissionStatus::Error(rejected())));
        assert_that!(filled.form, eq(&before));
    }

    #[rstest]
    fn error_allows_resubmission(mut filled: FormState) {
        filled.apply(FormEvent::Submit);
        filled.apply(FormEvent::Failed(SubmissionFailure::Network("timeout".to_string())));

        let effect = filled.apply(FormEvent::Submit);

        assert!(matches!(effect, Effect::Send(_)));
        assert_that!(filled.status, eq(&SubmissionStatus::Sending));
    }

    #[rstest]
    fn submit_while_sending_is_ignored(mut filled: FormState) {
        filled.apply(FormEvent::Submit);

        assert_that!(filled.apply(FormEvent::Submit), eq(&Effect::None));
        assert_that!(filled.status, eq(&SubmissionStatus::Sending));
    }

    #[rstest]
    #[case::name(Field::Name)]
    #[case::email(Field::Email)]
    #[case::message(Field::Message)]
    fn empty_field_blocks_submit(mut filled: FormState, #[case] field: Field) {
        filled.apply(FormEvent::Edit { field, value: "   ".to_string() });

        assert_that!(filled.apply(FormEvent::Submit), eq(&Effect::None));
        assert_that!(filled.status, eq(&SubmissionStatus::Idle));
        assert_that!(filled.form.missing_fields(), elements_are![eq(&field)]);
    }

    #[rstest]
    fn malformed_email_is_not_rejected(mut filled: FormState) {
        filled.apply(FormEvent::Edit { field: Field::Email, value: "not-an-email".to_string() });

        assert!(matches!(filled.apply(FormEvent::Submit), Effect::Send(_)));
    }

    #[rstest]
    fn edits_ignored_while_sending(mut filled: FormState) {
        filled.apply(FormEvent::Submit);

        filled.apply(FormEvent::Edit { field: Field::Name, value: "Bob".to_string() });

        assert_that!(filled.form.name.as_str(), eq("Ana"));
    }

    #[rstest]
    fn reset_outside_success_is_ignored(mut filled: FormState) {
        filled.apply(FormEvent::Reset);

        assert_that!(filled.form.name.as_str(), eq("Ana"));
        assert_that!(filled.status, eq(&SubmissionStatus::Idle));
    }

    #[rstest]
    fn outcome_without_submission_is_ignored() {
        let mut state = FormState::new();

        state.apply(FormEvent::Delivered);
        state.apply(FormEvent::Failed(SubmissionFailure::NotConfigured));

        assert_that!(state.status, eq(&SubmissionStatus::Idle));
    }

    #[rstest]
    #[case(Locale::Es, SubmissionStatus::Idle, "ENVIAR MENSAJE")]
    #[case(Locale::Es, SubmissionStatus::Sending, "ENVIANDO...")]
    #[case(Locale::En, SubmissionStatus::Error(SubmissionFailure::NotConfigured), "SEND MESSAGE")]
    fn button_label_follows_status(
        #[case] locale: Locale,
        #[case] status: SubmissionStatus,
        #[case] expected: &str,
    ) {
        let catalog = catalog();
        let buttons = &catalog.get(locale).contact.buttons;

        assert_that!(status.button_label(buttons), eq(expected));
    }

    #[rstest]
    fn status_presentation_flags() {
        let error = SubmissionStatus::Error(SubmissionFailure::NotConfigured);
        let catalog = catalog();
        let buttons = &catalog.get(Locale::En).contact.buttons;

        assert_that!(SubmissionStatus::Sending.is_submit_disabled(), eq(true));
        assert_that!(SubmissionStatus::Sending.shows_send_icon(), eq(false));
        assert_that!(error.shows_send_icon(), eq(true));
        assert_that!(SubmissionStatus::Success.shows_form(), eq(false));
        assert_that!(SubmissionStatus::Idle.error_message(buttons), none());
        assert_that!(error.error_message(buttons), some(contains_substring("error sending")));
    }
}
