use barcart_core_contact_contracts::ContactFeatureService;
use barcart_models::contact::{ContactInquiry, ContactSubmission};
use barcart_persistence_contracts::{contact::ContactRepository, Database, Transaction};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Db, ContactRepo> {
    db: Db,
    contact_repo: ContactRepo,
}

impl<Db, ContactRepo> ContactFeatureServiceImpl<Db, ContactRepo> {
    pub fn new(db: Db, contact_repo: ContactRepo) -> Self {
        Self { db, contact_repo }
    }
}

impl<Db, ContactRepo> ContactFeatureService for ContactFeatureServiceImpl<Db, ContactRepo>
where
    Db: Database,
    ContactRepo: ContactRepository<Db::Transaction>,
{
    async fn submit_inquiry(&self, inquiry: ContactInquiry) -> anyhow::Result<ContactSubmission> {
        let mut txn = self.db.begin_transaction().await?;
        let submission = self.contact_repo.create(&mut txn, &inquiry).await?;
        txn.commit().await?;

        debug!(id = *submission.id, "recorded contact submission");

        Ok(submission)
    }

    async fn list_submissions(&self) -> anyhow::Result<Vec<ContactSubmission>> {
        let mut txn = self.db.begin_transaction().await?;
        let submissions = self.contact_repo.list(&mut txn).await?;
        txn.commit().await?;

        Ok(submissions)
    }
}
