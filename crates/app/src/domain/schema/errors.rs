//! Schema service errors.

use thiserror::Error;

use crate::database::EnsureDatabaseError;

#[derive(Debug, Error)]
pub enum SchemaServiceError {
    #[error("failed to ensure database exists: {0}")]
    Database(#[from] EnsureDatabaseError),

    #[error("storage error: {0}")]
    Sql(#[from] sqlx::Error),
}
