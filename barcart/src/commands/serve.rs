use barcart_config::Config;
use barcart_core_contact_impl::ContactFeatureServiceImpl;
use barcart_core_health_impl::HealthFeatureServiceImpl;
use barcart_persistence_contracts::Database;
use barcart_persistence_postgres::contact::PostgresContactRepository;
use tracing::info;

use crate::{database, environment::RestServer};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to database");
    let database = database::connect(&config.database).await?;
    database.ping().await?;

    info!("Applying pending migrations");
    let mut applied = false;
    for name in database.run_migrations(None).await? {
        info!("Applied {name}");
        applied = true;
    }
    if !applied {
        info!("No migrations pending");
    }

    let health = HealthFeatureServiceImpl::new(database.clone());
    let contact = ContactFeatureServiceImpl::new(database, PostgresContactRepository);
    let server = RestServer::new(health, contact);
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
