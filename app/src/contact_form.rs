//! State machine of the contact dialog's form.
//!
//! The dialog starts in [`Phase::Editing`]. A successful [`ContactForm::submit`]
//! hands the captured address to a [`ContactSink`], moves to
//! [`Phase::Submitted`] and returns a [`SubmitTicket`] for the auto-close timer.
//! When the timer fires the dialog calls [`ContactForm::expire`] with that
//! ticket; it only resets the form if no newer ticket was issued and no
//! [`ContactForm::invalidate`] happened in between, so a late timer cannot close
//! a dialog that was reopened in the meantime.

use core::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long the confirmation stays visible before the dialog closes itself.
pub const AUTO_CLOSE_DELAY: Duration = Duration::from_millis(2000);

/// The value captured by the dialog and handed to whoever follows up on it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub email: String,
}

/// Receives captured contact requests.
#[cfg_attr(test, mockall::automock)]
pub trait ContactSink {
    fn deliver(&self, request: &ContactRequest);
}

/// Sink used when the caller does not provide one.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl ContactSink for LogSink {
    fn deliver(&self, request: &ContactRequest) {
        log::info!("Captured contact request for {}", request.email);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    Submitted,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("email address is empty")]
    EmptyEmail,
    #[error("the form was already submitted")]
    AlreadySubmitted,
}

/// Identifies one scheduled auto-close.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitTicket(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    email: String,
    phase: Phase,
    generation: u64,
}

impl ContactForm {
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.phase == Phase::Editing
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Hands the current address to `sink` and switches to the confirmation.
    ///
    /// # Errors
    ///
    /// [`SubmitError::EmptyEmail`] leaves the form untouched and the sink
    /// uncalled. [`SubmitError::AlreadySubmitted`] is returned while a
    /// confirmation is showing.
    pub fn submit(&mut self, sink: &dyn ContactSink) -> Result<SubmitTicket, SubmitError> {
        if self.phase == Phase::Submitted {
            return Err(SubmitError::AlreadySubmitted);
        }
        if self.email.is_empty() {
            return Err(SubmitError::EmptyEmail);
        }

        sink.deliver(&ContactRequest {
            email: self.email.clone(),
        });
        self.phase = Phase::Submitted;
        self.generation = self.generation.wrapping_add(1);
        Ok(SubmitTicket(self.generation))
    }

    /// Called when the auto-close timer for `ticket` fires.
    ///
    /// Returns `true` when the form was reset and the dialog should close.
    pub fn expire(&mut self, ticket: SubmitTicket) -> bool {
        if ticket.0 != self.generation || self.phase != Phase::Submitted {
            return false;
        }
        self.reset();
        true
    }

    /// Retires any outstanding ticket. A showing confirmation is cleared; a
    /// draft address in the editing phase is kept.
    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.phase == Phase::Submitted {
            self.reset();
        }
    }

    fn reset(&mut self) {
        self.email.clear();
        self.phase = Phase::Editing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use mockall::predicate::eq;

    #[test]
    fn test_empty_email_is_not_submitted() {
        let mut sink = MockContactSink::new();
        sink.expect_deliver().never();

        let mut form = ContactForm::default();
        assert_matches!(form.submit(&sink), Err(SubmitError::EmptyEmail));
        assert_eq!(form.phase(), Phase::Editing);
    }

    #[test]
    fn test_submit_hands_off_once_and_confirms() {
        let mut sink = MockContactSink::new();
        sink.expect_deliver()
            .with(eq(ContactRequest {
                email: "a@b.com".to_owned(),
            }))
            .times(1)
            .return_const(());

        let mut form = ContactForm::default();
        form.set_email("a@b.com");
        let ticket = form.submit(&sink);

        assert_matches!(ticket, Ok(_));
        assert_eq!(form.phase(), Phase::Submitted);
        assert_eq!(form.email(), "a@b.com");
    }

    #[test]
    fn test_second_submit_is_rejected() {
        let mut sink = MockContactSink::new();
        sink.expect_deliver().times(1).return_const(());

        let mut form = ContactForm::default();
        form.set_email("a@b.com");
        assert_matches!(form.submit(&sink), Ok(_));
        assert_matches!(form.submit(&sink), Err(SubmitError::AlreadySubmitted));
    }

    #[test]
    fn test_expire_resets_exactly_once() {
        let mut form = ContactForm::default();
        form.set_email("a@b.com");
        let Ok(ticket) = form.submit(&LogSink) else {
            panic!("submit should succeed");
        };

        assert!(form.expire(ticket));
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.email(), "");
        assert!(!form.expire(ticket));
    }

    #[test]
    fn test_invalidate_retires_pending_ticket() {
        let mut form = ContactForm::default();
        form.set_email("a@b.com");
        let Ok(ticket) = form.submit(&LogSink) else {
            panic!("submit should succeed");
        };

        form.invalidate();
        assert!(form.is_editing());
        assert_eq!(form.email(), "");
        assert!(!form.expire(ticket));
    }

    #[test]
    fn test_invalidate_keeps_draft_while_editing() {
        let mut form = ContactForm::default();
        form.set_email("draft@b.com");
        form.invalidate();
        assert_eq!(form.email(), "draft@b.com");
        assert!(form.is_editing());
    }

    #[test]
    fn test_contact_request_serialization() {
        let request = ContactRequest {
            email: "a@b.com".to_owned(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"email":"a@b.com"}"#);
    }
}
