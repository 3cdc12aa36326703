use barcart_core_health_contracts::{HealthFeatureService, HealthStatus};
use barcart_persistence_contracts::Database;
use tracing::error;

#[derive(Debug, Clone)]
pub struct HealthFeatureServiceImpl<Db> {
    db: Db,
}

impl<Db> HealthFeatureServiceImpl<Db> {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

impl<Db> HealthFeatureService for HealthFeatureServiceImpl<Db>
where
    Db: Database,
{
    async fn get_status(&self) -> HealthStatus {
        let database = self
            .db
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping database: {err}"))
            .is_ok();

        HealthStatus { database }
    }
}
