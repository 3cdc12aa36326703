use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use nutype::nutype;

use crate::email_address::EmailAddress;

#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deref,
    From,
    Serialize,
    Deserialize,
))]
pub struct SubmissionId(i64);

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, AsRef, Serialize, Deserialize)
)]
pub struct ContactFirstName(String);

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, AsRef, Serialize, Deserialize)
)]
pub struct ContactLastName(String);

/// Expected to be one of "wedding", "corporate", "private", "class" or
/// "other", but only checked for non-emptiness, matching the booking form.
#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, AsRef, Serialize, Deserialize)
)]
pub struct EventType(String);

#[nutype(
    validate(len_char_min = 10),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, AsRef, Serialize, Deserialize)
)]
pub struct InquiryMessage(String);

/// A booking inquiry as authored by a visitor. Only constructible from input
/// that satisfies all field constraints, so anything holding a
/// `ContactInquiry` may transmit or persist it without re-checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInquiry {
    pub first_name: ContactFirstName,
    pub last_name: ContactLastName,
    pub email: EmailAddress,
    pub phone: Option<String>,
    pub event_type: EventType,
    pub guest_count: Option<String>,
    pub event_date: Option<String>,
    pub budget: Option<String>,
    pub location: Option<String>,
    pub message: InquiryMessage,
    pub newsletter: bool,
}

/// Raw form field values before validation. Everything is text except the
/// newsletter checkbox.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInquiryDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub event_type: String,
    pub guest_count: String,
    pub event_date: String,
    pub budget: String,
    pub location: String,
    pub message: String,
    pub newsletter: bool,
}

impl ContactInquiry {
    /// Validates a draft. Every field is checked independently and all
    /// violations are collected, so the caller can render every error at
    /// once instead of stopping at the first one.
    pub fn from_draft(draft: &ContactInquiryDraft) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let first_name = errors.check(
            ContactField::FirstName,
            FieldError::RequiredField,
            ContactFirstName::try_new(draft.first_name.clone()),
        );
        let last_name = errors.check(
            ContactField::LastName,
            FieldError::RequiredField,
            ContactLastName::try_new(draft.last_name.clone()),
        );
        let email = errors.check(
            ContactField::Email,
            FieldError::InvalidFormat,
            EmailAddress::try_new(draft.email.clone()),
        );
        let event_type = errors.check(
            ContactField::EventType,
            FieldError::RequiredField,
            EventType::try_new(draft.event_type.clone()),
        );
        let message = errors.check(
            ContactField::Message,
            FieldError::TooShort,
            InquiryMessage::try_new(draft.message.clone()),
        );

        match (first_name, last_name, email, event_type, message) {
            (Some(first_name), Some(last_name), Some(email), Some(event_type), Some(message)) => {
                Ok(Self {
                    first_name,
                    last_name,
                    email,
                    phone: optional(&draft.phone),
                    event_type,
                    guest_count: optional(&draft.guest_count),
                    event_date: optional(&draft.event_date),
                    budget: optional(&draft.budget),
                    location: optional(&draft.location),
                    message,
                    newsletter: draft.newsletter,
                })
            }
            _ => Err(errors),
        }
    }
}

fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

/// The validated form fields, named as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    EventType,
    Message,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::EventType => "eventType",
            Self::Message => "message",
        }
    }

    /// The inline error text rendered next to the field.
    pub fn message(self, error: FieldError) -> &'static str {
        match (self, error) {
            (Self::FirstName, _) => "First name is required",
            (Self::LastName, _) => "Last name is required",
            (Self::Email, _) => "Please enter a valid email",
            (Self::EventType, _) => "Please select an event type",
            (Self::Message, _) => "Please provide more details about your event",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// A mandatory field was empty at submit time.
    RequiredField,
    /// The value does not match the field's expected grammar.
    InvalidFormat,
    /// The value is below the field's minimum length.
    TooShort,
}

/// All violations of one validation pass, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<ContactField, FieldError>);

impl ValidationErrors {
    fn check<T, E>(
        &mut self,
        field: ContactField,
        error: FieldError,
        result: Result<T, E>,
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(_) => {
                self.0.insert(field, error);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: ContactField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, FieldError)> + '_ {
        self.0.iter().map(|(&field, &error)| (field, error))
    }

    /// Field name and inline error text pairs, in field order.
    pub fn messages(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.iter()
            .map(|(field, error)| (field.as_str(), field.message(error)))
    }
}

/// The durable, store-assigned representation of an accepted inquiry.
/// Created exactly once per successful submission, never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub id: SubmissionId,
    pub inquiry: ContactInquiry,
    pub created_at: DateTime<Utc>,
}
