use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use barcart_core_contact_contracts::ContactFeatureService;
use barcart_models::contact::ContactInquiry;

use super::{internal_server_error, validation_error};
use crate::models::contact::{ApiContactInquiry, ApiContactSubmission};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route(
            "/api/contact",
            routing::post(submit_inquiry).get(list_submissions),
        )
        .with_state(service)
}

async fn submit_inquiry(
    service: State<Arc<impl ContactFeatureService>>,
    Json(request): Json<ApiContactInquiry>,
) -> Response {
    let inquiry = match ContactInquiry::from_draft(&request.into()) {
        Ok(inquiry) => inquiry,
        Err(errors) => return validation_error(&errors),
    };

    match service.submit_inquiry(inquiry).await {
        Ok(submission) => Json(ApiContactSubmission::from(submission)).into_response(),
        Err(err) => internal_server_error(err),
    }
}

async fn list_submissions(service: State<Arc<impl ContactFeatureService>>) -> Response {
    match service.list_submissions().await {
        Ok(submissions) => Json(
            submissions
                .into_iter()
                .map(ApiContactSubmission::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(err) => internal_server_error(err),
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use barcart_core_contact_contracts::MockContactFeatureService;
    use barcart_models::contact::{ContactInquiryDraft, ContactSubmission};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    fn inquiry() -> ContactInquiry {
        ContactInquiry::from_draft(&ContactInquiryDraft {
            first_name: "Sam".into(),
            last_name: "Lee".into(),
            email: "sam@example.com".into(),
            event_type: "wedding".into(),
            message: "Looking for a bar service for 80 guests in June".into(),
            ..Default::default()
        })
        .unwrap()
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            id: 1.into(),
            inquiry: inquiry(),
            created_at: "2026-06-01T12:00:00Z".parse().unwrap(),
        }
    }

    async fn send(
        service: MockContactFeatureService,
        request: Request<Body>,
    ) -> (StatusCode, Value) {
        let response = router(Arc::new(service)).oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn post(body: Value) -> Request<Body> {
        Request::post("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn submit_valid_inquiry_echoes_the_stored_record() {
        // Arrange
        let service =
            MockContactFeatureService::new().with_submit_inquiry(inquiry(), submission());

        // Act
        let (status, body) = send(
            service,
            post(json!({
                "firstName": "Sam",
                "lastName": "Lee",
                "email": "sam@example.com",
                "eventType": "wedding",
                "message": "Looking for a bar service for 80 guests in June",
            })),
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::OK);
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

    #[tokio::test]
    async fn submit_invalid_inquiry_is_rejected_with_per_field_errors() {
        // Arrange: the mock panics on any call, so nothing reaches the store
        let service = MockContactFeatureService::new();

        // Act
        let (status, body) = send(service, post(json!({ "firstName": "Sam" }))).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "detail": "Validation failed",
                "errors": {
                    "lastName": "Last name is required",
                    "email": "Please enter a valid email",
                    "eventType": "Please select an event type",
                    "message": "Please provide more details about your event",
                },
            })
        );
    }

    #[tokio::test]
    async fn store_fault_maps_to_a_generic_500() {
        // Arrange
        let service = MockContactFeatureService::new().with_submit_inquiry_error(inquiry());

        // Act
        let (status, body) = send(
            service,
            post(json!({
                "firstName": "Sam",
                "lastName": "Lee",
                "email": "sam@example.com",
                "eventType": "wedding",
                "message": "Looking for a bar service for 80 guests in June",
            })),
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "detail": "Internal server error" }));
    }

    #[tokio::test]
    async fn list_returns_all_stored_submissions() {
        // Arrange
        let service =
            MockContactFeatureService::new().with_list_submissions(vec![submission()]);

        // Act
        let request = Request::get("/api/contact").body(Body::empty()).unwrap();
        let (status, body) = send(service, request).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["id"], json!(1));
        assert_eq!(body[0]["email"], json!("sam@example.com"));
        assert_eq!(body.as_array().unwrap().len(), 1);
    }
}
