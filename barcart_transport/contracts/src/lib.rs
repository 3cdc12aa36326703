use std::future::Future;

use barcart_models::contact::{ContactInquiry, ContactSubmission};
use thiserror::Error;

/// Delivers validated inquiries to the submission store.
///
/// Delivery is at-least-once: a retry after a reported failure may create a
/// second record if the first request did reach the store.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SubmissionTransport: Send + Sync + 'static {
    /// Issues a single request carrying the full inquiry and returns the
    /// stored record on acknowledgment.
    fn submit(
        &self,
        inquiry: &ContactInquiry,
    ) -> impl Future<Output = Result<ContactSubmission, SubmissionTransportError>> + Send;
}

#[derive(Debug, Error)]
pub enum SubmissionTransportError {
    /// The store rejected the payload, was unreachable, or reported an
    /// internal fault. Intentionally carries no detail; callers surface a
    /// generic retry-oriented notice.
    #[error("Failed to submit inquiry.")]
    Failed,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockSubmissionTransport {
    pub fn with_submit(mut self, inquiry: ContactInquiry, result: ContactSubmission) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(inquiry))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_submit_failed(mut self, inquiry: ContactInquiry) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(inquiry))
            .return_once(|_| {
                Box::pin(std::future::ready(Err(SubmissionTransportError::Failed)))
            });
        self
    }
}
