//! Schema service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::schema::{
        errors::SchemaServiceError,
        records::{BootstrapOutcome, ProductSample},
        repository::PgSchemaRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgSchemaService {
    db: Db,
    repository: PgSchemaRepository,
}

impl PgSchemaService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            repository: PgSchemaRepository::new(db.pool().clone()),
            db,
        }
    }
}

#[async_trait]
impl SchemaService for PgSchemaService {
    async fn bootstrap(&self) -> Result<BootstrapOutcome, SchemaServiceError> {
        let database_created = self.db.ensure_database().await?;
        let seeded = self.repository.bootstrap().await?;

        info!(
            database = %self.db.name(),
            database_created,
            seeded,
            "schema bootstrap complete"
        );

        Ok(BootstrapOutcome {
            database_created,
            seeded,
        })
    }

    async fn sample_products(&self, limit: u32) -> Result<Vec<ProductSample>, SchemaServiceError> {
        Ok(self.repository.sample_products(limit).await?)
    }
}

#[automock]
#[async_trait]
pub trait SchemaService: Send + Sync {
    /// Create the database, table and indexes when missing, seeding an empty table.
    ///
    /// Safe to run any number of times, including concurrently.
    async fn bootstrap(&self) -> Result<BootstrapOutcome, SchemaServiceError>;

    /// Up to `limit` products in id order, deleted or not.
    async fn sample_products(&self, limit: u32) -> Result<Vec<ProductSample>, SchemaServiceError>;
}
