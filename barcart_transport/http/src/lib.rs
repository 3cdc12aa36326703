use std::{sync::Arc, time::Duration};

use anyhow::Context;
use barcart_models::contact::{ContactInquiry, ContactSubmission};
use barcart_transport_contracts::{SubmissionTransport, SubmissionTransportError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

mod http;

/// Submits inquiries to the store's `/api/contact` endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSubmissionTransport {
    config: HttpSubmissionTransportConfig,
    client: reqwest::Client,
}

#[derive(Debug, Clone)]
pub struct HttpSubmissionTransportConfig {
    pub base_url: Arc<Url>,
    pub request_timeout: Duration,
}

impl HttpSubmissionTransport {
    pub fn new(config: HttpSubmissionTransportConfig) -> anyhow::Result<Self> {
        let client = http::build_client(config.request_timeout)?;
        Ok(Self { config, client })
    }
}

impl SubmissionTransport for HttpSubmissionTransport {
    async fn submit(
        &self,
        inquiry: &ContactInquiry,
    ) -> Result<ContactSubmission, SubmissionTransportError> {
        let url = self
            .config
            .base_url
            .join("api/contact")
            .context("Failed to construct submission endpoint url")?;

        let response = self
            .client
            .post(url)
            .json(&SubmitRequest::new(inquiry))
            .send()
            .await
            .map_err(|err| {
                debug!("submission request failed: {err}");
                SubmissionTransportError::Failed
            })?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "submission rejected by store");
            return Err(SubmissionTransportError::Failed);
        }

        response
            .json::<SubmitResponse>()
            .await
            .context("Failed to decode submission response")?
            .try_into()
            .map_err(SubmissionTransportError::Other)
    }
}

/// The wire shape of an inquiry. The boolean newsletter flag crosses the
/// boundary as the text literal "yes" or "no".
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitRequest<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<&'a str>,
    event_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    guest_count: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    event_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    budget: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<&'a str>,
    message: &'a str,
    newsletter: &'static str,
}

impl<'a> SubmitRequest<'a> {
    fn new(inquiry: &'a ContactInquiry) -> Self {
        Self {
            first_name: &inquiry.first_name,
            last_name: &inquiry.last_name,
            email: inquiry.email.as_str(),
            phone: inquiry.phone.as_deref(),
            event_type: &inquiry.event_type,
            guest_count: inquiry.guest_count.as_deref(),
            event_date: inquiry.event_date.as_deref(),
            budget: inquiry.budget.as_deref(),
            location: inquiry.location.as_deref(),
            message: &inquiry.message,
            newsletter: if inquiry.newsletter { "yes" } else { "no" },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitResponse {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    #[serde(default)]
    phone: Option<String>,
    event_type: String,
    #[serde(default)]
    guest_count: Option<String>,
    #[serde(default)]
    event_date: Option<String>,
    #[serde(default)]
    budget: Option<String>,
    #[serde(default)]
    location: Option<String>,
    message: String,
    #[serde(default)]
    newsletter: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<SubmitResponse> for ContactSubmission {
    type Error = anyhow::Error;

    fn try_from(value: SubmitResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            inquiry: ContactInquiry {
                first_name: value.first_name.try_into()?,
                last_name: value.last_name.try_into()?,
                email: value.email.parse()?,
                phone: value.phone,
                event_type: value.event_type.try_into()?,
                guest_count: value.guest_count,
                event_date: value.event_date,
                budget: value.budget,
                location: value.location,
                message: value.message.try_into()?,
                newsletter: value.newsletter.as_deref() == Some("yes"),
            },
            created_at: value.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use barcart_models::contact::ContactInquiryDraft;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn inquiry(newsletter: bool) -> ContactInquiry {
        ContactInquiry::from_draft(&ContactInquiryDraft {
            first_name: "Sam".into(),
            last_name: "Lee".into(),
            email: "sam@example.com".into(),
            event_type: "wedding".into(),
            message: "Looking for a bar service for 80 guests in June".into(),
            newsletter,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn newsletter_crosses_the_wire_as_yes() {
        let request = serde_json::to_value(SubmitRequest::new(&inquiry(true))).unwrap();

        assert_eq!(
            request,
            json!({
                "firstName": "Sam",
                "lastName": "Lee",
                "email": "sam@example.com",
                "eventType": "wedding",
                "message": "Looking for a bar service for 80 guests in June",
                "newsletter": "yes",
            })
        );
    }

    #[test]
    fn newsletter_crosses_the_wire_as_no() {
        let request = serde_json::to_value(SubmitRequest::new(&inquiry(false))).unwrap();

        assert_eq!(request["newsletter"], json!("no"));
    }

    #[test]
    fn response_decodes_into_a_submission() {
        let response = serde_json::from_value::<SubmitResponse>(json!({
            "id": 1,
            "firstName": "Sam",
            "lastName": "Lee",
            "email": "sam@example.com",
            "phone": null,
            "eventType": "wedding",
            "message": "Looking for a bar service for 80 guests in June",
            "newsletter": "no",
            "createdAt": "2026-06-01T12:00:00Z",
        }))
        .unwrap();

        let submission = ContactSubmission::try_from(response).unwrap();

        assert_eq!(*submission.id, 1);
        assert_eq!(submission.inquiry, inquiry(false));
        assert_eq!(
            submission.created_at,
            "2026-06-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }
}
