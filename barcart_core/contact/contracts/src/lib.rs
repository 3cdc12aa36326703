use std::future::Future;

use barcart_models::contact::{ContactInquiry, ContactSubmission};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Durably records a validated inquiry and returns the stored record,
    /// including its store-assigned id and creation timestamp.
    fn submit_inquiry(
        &self,
        inquiry: ContactInquiry,
    ) -> impl Future<Output = anyhow::Result<ContactSubmission>> + Send;

    /// Returns all recorded submissions, oldest first.
    fn list_submissions(
        &self,
    ) -> impl Future<Output = anyhow::Result<Vec<ContactSubmission>>> + Send;
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit_inquiry(
        mut self,
        inquiry: ContactInquiry,
        result: ContactSubmission,
    ) -> Self {
        self.expect_submit_inquiry()
            .once()
            .with(mockall::predicate::eq(inquiry))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_submit_inquiry_error(mut self, inquiry: ContactInquiry) -> Self {
        self.expect_submit_inquiry()
            .once()
            .with(mockall::predicate::eq(inquiry))
            .return_once(|_| Box::pin(std::future::ready(Err(anyhow::anyhow!("store fault")))));
        self
    }

    pub fn with_list_submissions(mut self, result: Vec<ContactSubmission>) -> Self {
        self.expect_list_submissions()
            .once()
            .return_once(move || Box::pin(std::future::ready(Ok(result))));
        self
    }
}
