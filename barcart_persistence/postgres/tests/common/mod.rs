use std::sync::{Mutex, MutexGuard, PoisonError};

use barcart_persistence_postgres::{PostgresDatabase, PostgresDatabaseConfig};

pub type Db = PostgresDatabase;

// Every test resets the shared database, so they run one at a time.
static LOCK: Mutex<()> = Mutex::new(());

pub async fn setup() -> (MutexGuard<'static, ()>, Db) {
    let (guard, db) = setup_clean().await;

    db.run_migrations(None).await.unwrap();

    (guard, db)
}

pub async fn setup_clean() -> (MutexGuard<'static, ()>, Db) {
    let guard = LOCK.lock().unwrap_or_else(PoisonError::into_inner);

    let config = barcart_config::load(&[barcart_config::DEFAULT_CONFIG_PATH]).unwrap();

    let db = Db::connect(&PostgresDatabaseConfig {
        url: config.database.url,
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        acquire_timeout: config.database.acquire_timeout.into(),
        idle_timeout: config.database.idle_timeout.map(Into::into),
        max_lifetime: config.database.max_lifetime.map(Into::into),
    })
    .await
    .unwrap();

    db.reset().await.unwrap();
    (guard, db)
}
