use std::future::Future;

use barcart_models::contact::{ContactInquiry, ContactSubmission};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Appends the inquiry to the submission table and returns the stored
    /// record with its database-assigned id and creation timestamp.
    ///
    /// Records are never updated or deleted; resubmitting the same inquiry
    /// creates a second, distinct record.
    fn create(
        &self,
        txn: &mut Txn,
        inquiry: &ContactInquiry,
    ) -> impl Future<Output = anyhow::Result<ContactSubmission>> + Send;

    /// Returns all stored submissions, oldest first.
    fn list(
        &self,
        txn: &mut Txn,
    ) -> impl Future<Output = anyhow::Result<Vec<ContactSubmission>>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockContactRepository<Txn> {
    pub fn with_create(mut self, inquiry: ContactInquiry, result: ContactSubmission) -> Self {
        self.expect_create()
            .once()
            .withf(move |_, x| *x == inquiry)
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_create_error(mut self, inquiry: ContactInquiry) -> Self {
        self.expect_create()
            .once()
            .withf(move |_, x| *x == inquiry)
            .return_once(|_, _| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!("database error"))))
            });
        self
    }

    pub fn with_list(mut self, result: Vec<ContactSubmission>) -> Self {
        self.expect_list()
            .once()
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
