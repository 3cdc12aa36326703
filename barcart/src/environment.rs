use barcart_core_contact_impl::ContactFeatureServiceImpl;
use barcart_core_health_impl::HealthFeatureServiceImpl;
use barcart_persistence_postgres::{contact::PostgresContactRepository, PostgresDatabase};

pub type Database = PostgresDatabase;

pub type ContactFeature = ContactFeatureServiceImpl<Database, PostgresContactRepository>;
pub type HealthFeature = HealthFeatureServiceImpl<Database>;

pub type RestServer = barcart_api_rest::RestServer<HealthFeature, ContactFeature>;
