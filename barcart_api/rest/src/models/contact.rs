use barcart_models::contact::{ContactInquiryDraft, ContactSubmission};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An inquiry as received on the wire. Everything arrives as text; missing
/// fields default to empty and are caught by validation, so the endpoint
/// can report every violation instead of failing on deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactInquiry {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub guest_count: String,
    #[serde(default)]
    pub event_date: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub newsletter: ApiNewsletter,
}

impl From<ApiContactInquiry> for ContactInquiryDraft {
    fn from(value: ApiContactInquiry) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            phone: value.phone,
            event_type: value.event_type,
            guest_count: value.guest_count,
            event_date: value.event_date,
            budget: value.budget,
            location: value.location,
            message: value.message,
            newsletter: value.newsletter.into(),
        }
    }
}

/// The newsletter flag crosses the wire as the text literal "yes" or "no",
/// not as a boolean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiNewsletter {
    Yes,
    #[default]
    No,
}

impl From<ApiNewsletter> for bool {
    fn from(value: ApiNewsletter) -> Self {
        matches!(value, ApiNewsletter::Yes)
    }
}

impl From<bool> for ApiNewsletter {
    fn from(value: bool) -> Self {
        if value {
            Self::Yes
        } else {
            Self::No
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactSubmission {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub event_type: String,
    pub guest_count: Option<String>,
    pub event_date: Option<String>,
    pub budget: Option<String>,
    pub location: Option<String>,
    pub message: String,
    pub newsletter: ApiNewsletter,
    pub created_at: DateTime<Utc>,
}

impl From<ContactSubmission> for ApiContactSubmission {
    fn from(value: ContactSubmission) -> Self {
        let inquiry = value.inquiry;
        Self {
            id: *value.id,
            first_name: inquiry.first_name.into_inner(),
            last_name: inquiry.last_name.into_inner(),
            email: inquiry.email.into_inner(),
            phone: inquiry.phone,
            event_type: inquiry.event_type.into_inner(),
            guest_count: inquiry.guest_count,
            event_date: inquiry.event_date,
            budget: inquiry.budget,
            location: inquiry.location,
            message: inquiry.message.into_inner(),
            newsletter: inquiry.newsletter.into(),
            created_at: value.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use barcart_models::contact::{ContactInquiry, SubmissionId};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn inquiry_deserializes_with_newsletter_yes() {
        let inquiry = serde_json::from_value::<ApiContactInquiry>(json!({
            "firstName": "Sam",
            "lastName": "Lee",
            "email": "sam@example.com",
            "eventType": "wedding",
            "message": "Looking for a bar service for 80 guests in June",
            "newsletter": "yes",
        }))
        .unwrap();

        let draft = ContactInquiryDraft::from(inquiry);
        assert_eq!(draft.first_name, "Sam");
        assert!(draft.newsletter);
        assert_eq!(draft.phone, "");
    }

    #[test]
    fn missing_newsletter_defaults_to_no() {
        let inquiry = serde_json::from_value::<ApiContactInquiry>(json!({})).unwrap();

        assert_eq!(inquiry.newsletter, ApiNewsletter::No);
        assert!(!ContactInquiryDraft::from(inquiry).newsletter);
    }

    #[test]
    fn submission_serializes_camel_case() {
        let draft = ContactInquiryDraft {
            first_name: "Sam".into(),
            last_name: "Lee".into(),
            email: "sam@example.com".into(),
            event_type: "wedding".into(),
            message: "Looking for a bar service for 80 guests in June".into(),
            ..Default::default()
        };
        let submission = ContactSubmission {
            id: SubmissionId::new(1),
            inquiry: ContactInquiry::from_draft(&draft).unwrap(),
            created_at: "2026-06-01T12:00:00Z".parse().unwrap(),
        };

        let body = serde_json::to_value(ApiContactSubmission::from(submission)).unwrap();

        assert_eq!(
            body,
            json!({
                "id": 1,
                "firstName": "Sam",
                "lastName": "Lee",
                "email": "sam@example.com",
                "phone": null,
                "eventType": "wedding",
                "guestCount": null,
                "eventDate": null,
                "budget": null,
                "location": null,
                "message": "Looking for a bar service for 80 guests in June",
                "newsletter": "no",
                "createdAt": "2026-06-01T12:00:00Z",
            })
        );
    }
}
