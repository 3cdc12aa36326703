use barcart_models::contact::{
    ContactInquiry, ContactInquiryDraft, ContactSubmission, ValidationErrors,
};
use barcart_transport_contracts::{SubmissionTransport, SubmissionTransportError};
use tracing::debug;

/// One booking form instance.
///
/// All form state (entered values, validation errors, the in-flight flag,
/// pending notices) is owned by the instance; separate forms are fully
/// independent. Validation runs on every submission attempt, never per
/// keystroke.
#[derive(Debug)]
pub struct ContactForm<T> {
    transport: T,
    draft: ContactInquiryDraft,
    errors: ValidationErrors,
    in_flight: bool,
    notices: Vec<Notice>,
}

/// A user-visible toast resulting from a resolved submission. Exactly one
/// notice is produced per resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// "Thank you for your inquiry!"
    Success,
    /// "There was an error submitting your form. Please try again."
    Failure,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The attempt had no effect: a submission was already in flight, or a
    /// resolution arrived with none in flight.
    Suppressed,
    /// Validation failed; errors were recorded and no request was issued.
    Invalid,
    /// The store acknowledged the submission; the form has been reset.
    Accepted(ContactSubmission),
    /// The request failed; entered values are preserved for a retry.
    Failed,
}

impl<T> ContactForm<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            draft: ContactInquiryDraft::default(),
            errors: ValidationErrors::default(),
            in_flight: false,
            notices: Vec::new(),
        }
    }

    /// The currently entered field values.
    pub fn draft(&self) -> &ContactInquiryDraft {
        &self.draft
    }

    /// Mutable access for field entry.
    pub fn draft_mut(&mut self) -> &mut ContactInquiryDraft {
        &mut self.draft
    }

    /// Validation errors of the most recent submission attempt, rendered
    /// next to their fields.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Whether the submit control is currently disabled.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Drains the notices produced since the last call.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Validates the draft and, if it passes and no submission is in
    /// flight, disables the submit control and returns the inquiry to
    /// deliver. Returns `None` without touching the transport otherwise.
    pub fn begin_submit(&mut self) -> Option<ContactInquiry> {
        if self.in_flight {
            debug!("submit attempt while a submission is in flight, suppressed");
            return None;
        }

        match ContactInquiry::from_draft(&self.draft) {
            Ok(inquiry) => {
                self.errors = ValidationErrors::default();
                self.in_flight = true;
                Some(inquiry)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Applies the outcome of a delivery started via [`Self::begin_submit`]:
    /// re-enables the submit control, resets the fields on success,
    /// preserves them on failure, and records exactly one notice. Ignored
    /// when no submission is in flight.
    pub fn resolve(
        &mut self,
        result: Result<ContactSubmission, SubmissionTransportError>,
    ) -> SubmitOutcome {
        if !self.in_flight {
            debug!("resolution without a submission in flight, ignored");
            return SubmitOutcome::Suppressed;
        }

        self.in_flight = false;
        match result {
            Ok(submission) => {
                self.draft = ContactInquiryDraft::default();
                self.notices.push(Notice::Success);
                SubmitOutcome::Accepted(submission)
            }
            Err(_) => {
                self.notices.push(Notice::Failure);
                SubmitOutcome::Failed
            }
        }
    }
}

impl<T: SubmissionTransport> ContactForm<T> {
    /// Handles one activation of the submit control end to end.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.in_flight {
            return SubmitOutcome::Suppressed;
        }

        let Some(inquiry) = self.begin_submit() else {
            return SubmitOutcome::Invalid;
        };

        let result = self.transport.submit(&inquiry).await;
        self.resolve(result)
    }
}

#[cfg(test)]
mod tests {
    use barcart_models::contact::{ContactField, FieldError};
    use barcart_transport_contracts::MockSubmissionTransport;
    use barcart_utils::assert_matches;
    use chrono::DateTime;
    use pretty_assertions::assert_eq;

    use super::*;

    fn filled_form(transport: MockSubmissionTransport) -> ContactForm<MockSubmissionTransport> {
        let mut form = ContactForm::new(transport);
        *form.draft_mut() = ContactInquiryDraft {
            first_name: "Sam".into(),
            last_name: "Lee".into(),
            email: "sam@example.com".into(),
            event_type: "wedding".into(),
            message: "Looking for a bar service for 80 guests in June".into(),
            ..Default::default()
        };
        form
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            id: 1.into(),
            inquiry: ContactInquiry::from_draft(&filled_form(MockSubmissionTransport::new()).draft)
                .unwrap(),
            created_at: DateTime::UNIX_EPOCH,
        }
    }

    #[tokio::test]
    async fn accepted_submission_resets_the_form() {
        // Arrange
        let inquiry = submission().inquiry;
        let transport = MockSubmissionTransport::new().with_submit(inquiry, submission());
        let mut form = filled_form(transport);

        // Act
        let outcome = form.submit().await;

        // Assert
        assert_eq!(outcome, SubmitOutcome::Accepted(submission()));
        assert_eq!(*form.draft(), ContactInquiryDraft::default());
        assert!(form.errors().is_empty());
        assert!(!form.is_in_flight());
        assert_eq!(form.take_notices(), [Notice::Success]);
        assert_eq!(form.take_notices(), []);
    }

    #[tokio::test]
    async fn failed_submission_preserves_entered_values() {
        // Arrange
        let inquiry = submission().inquiry;
        let transport = MockSubmissionTransport::new().with_submit_failed(inquiry);
        let mut form = filled_form(transport);
        let draft = form.draft().clone();

        // Act
        let outcome = form.submit().await;

        // Assert
        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(*form.draft(), draft);
        assert!(!form.is_in_flight());
        assert_eq!(form.take_notices(), [Notice::Failure]);
        assert_eq!(form.take_notices(), []);
    }

    #[tokio::test]
    async fn invalid_draft_issues_no_request() {
        // Arrange: the mock panics on any call, proving nothing reaches the
        // network.
        let mut form = filled_form(MockSubmissionTransport::new());
        form.draft_mut().message = "hi".into();

        // Act
        let outcome = form.submit().await;

        // Assert
        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_matches!(
            form.errors().get(ContactField::Message),
            Some(FieldError::TooShort)
        );
        assert_eq!(form.draft().message, "hi");
        assert_eq!(form.take_notices(), []);
    }

    #[tokio::test]
    async fn empty_form_reports_every_violation_at_once() {
        // Arrange
        let mut form = ContactForm::new(MockSubmissionTransport::new());

        // Act
        let outcome = form.submit().await;

        // Assert
        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(form.errors().len(), 5);
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_suppressed() {
        // Arrange
        let mut form = filled_form(MockSubmissionTransport::new());
        form.begin_submit().unwrap();

        // Act
        let outcome = form.submit().await;

        // Assert
        assert_eq!(outcome, SubmitOutcome::Suppressed);
        assert!(form.is_in_flight());
        assert_eq!(form.take_notices(), []);
    }

    #[tokio::test]
    async fn begin_submit_is_one_shot_until_resolved() {
        // Arrange
        let mut form = filled_form(MockSubmissionTransport::new());

        // Act
        let first = form.begin_submit();
        let second = form.begin_submit();

        // Assert
        assert!(first.is_some());
        assert!(second.is_none());

        // resolving re-enables the control
        form.resolve(Err(SubmissionTransportError::Failed));
        assert!(form.begin_submit().is_some());
    }

    #[tokio::test]
    async fn resolution_without_a_submission_in_flight_is_ignored() {
        // Arrange
        let mut form = filled_form(MockSubmissionTransport::new());
        let draft = form.draft().clone();

        // Act
        let outcome = form.resolve(Ok(submission()));

        // Assert: no notice, no reset, the control stays enabled
        assert_eq!(outcome, SubmitOutcome::Suppressed);
        assert_eq!(*form.draft(), draft);
        assert!(!form.is_in_flight());
        assert_eq!(form.take_notices(), []);
    }

    #[tokio::test]
    async fn successful_validation_clears_stale_errors() {
        // Arrange
        let inquiry = submission().inquiry;
        let transport = MockSubmissionTransport::new().with_submit(inquiry, submission());
        let mut form = filled_form(transport);

        let message = std::mem::take(&mut form.draft_mut().message);
        assert_eq!(form.submit().await, SubmitOutcome::Invalid);
        assert!(!form.errors().is_empty());

        // Act
        form.draft_mut().message = message;
        let outcome = form.submit().await;

        // Assert
        assert_matches!(outcome, SubmitOutcome::Accepted(_));
        assert!(form.errors().is_empty());
        form.take_notices();
    }
}
