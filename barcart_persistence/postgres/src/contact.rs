use barcart_models::contact::{
    ContactFirstName, ContactInquiry, ContactLastName, ContactSubmission, EventType,
    InquiryMessage, SubmissionId,
};
use barcart_persistence_contracts::contact::ContactRepository;
use bb8_postgres::tokio_postgres::Row;

use crate::{arg_indices, columns, PostgresTransaction};

#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresContactRepository;

columns!(submission as "s": "id", "first_name", "last_name", "email", "phone", "event_type", "guest_count", "event_date", "budget", "location", "message", "newsletter", "created_at");
columns!(inquiry as "i": "first_name", "last_name", "email", "phone", "event_type", "guest_count", "event_date", "budget", "location", "message", "newsletter");

impl ContactRepository<PostgresTransaction> for PostgresContactRepository {
    async fn create(
        &self,
        txn: &mut PostgresTransaction,
        inquiry: &ContactInquiry,
    ) -> anyhow::Result<ContactSubmission> {
        // id and created_at are assigned by the database.
        let newsletter = if inquiry.newsletter { "yes" } else { "no" };
        let row = txn
            .txn()
            .query_one(
                &format!(
                    "insert into contact_submissions ({INQUIRY_COL_NAMES}) values ({}) returning \
                     id, created_at",
                    arg_indices(1..=INQUIRY_CNT)
                ),
                &[
                    &*inquiry.first_name,
                    &*inquiry.last_name,
                    &inquiry.email.as_str(),
                    &inquiry.phone,
                    &*inquiry.event_type,
                    &inquiry.guest_count,
                    &inquiry.event_date,
                    &inquiry.budget,
                    &inquiry.location,
                    &*inquiry.message,
                    &newsletter,
                ],
            )
            .await?;

        Ok(ContactSubmission {
            id: row.get::<_, i64>(0).into(),
            inquiry: inquiry.clone(),
            created_at: row.get(1),
        })
    }

    async fn list(
        &self,
        txn: &mut PostgresTransaction,
    ) -> anyhow::Result<Vec<ContactSubmission>> {
        txn.txn()
            .query(
                &format!(
                    "select {SUBMISSION_COLS} from contact_submissions s order by s.created_at \
                     asc, s.id asc"
                ),
                &[],
            )
            .await
            .map_err(Into::into)
            .and_then(|rows| {
                rows.into_iter()
                    .map(|row| decode_submission(&row, &mut 0))
                    .collect()
            })
    }
}

fn decode_submission(row: &Row, offset: &mut usize) -> anyhow::Result<ContactSubmission> {
    let mut idx = || {
        *offset += 1;
        *offset - 1
    };

    Ok(ContactSubmission {
        id: row.get::<_, i64>(idx()).into(),
        inquiry: ContactInquiry {
            first_name: ContactFirstName::try_new(row.get::<_, String>(idx()))?,
            last_name: ContactLastName::try_new(row.get::<_, String>(idx()))?,
            email: row.get::<_, String>(idx()).parse()?,
            phone: row.get(idx()),
            event_type: EventType::try_new(row.get::<_, String>(idx()))?,
            guest_count: row.get(idx()),
            event_date: row.get(idx()),
            budget: row.get(idx()),
            location: row.get(idx()),
            message: InquiryMessage::try_new(row.get::<_, String>(idx()))?,
            newsletter: row.get::<_, Option<String>>(idx()).as_deref() == Some("yes"),
        },
        created_at: row.get(idx()),
    })
}
