//! Product Records

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use serde::Serialize;
use sqlx::{Row, postgres::PgRow};
use thiserror::Error;

use crate::ids::TypedId;

/// Product ID
pub type ProductId = TypedId<ProductRecord>;

/// Product lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum ProductStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl ProductStatus {
    /// Every status, in declaration order.
    pub const ALL: [ProductStatus; 3] = [Self::Draft, Self::Published, Self::Archived];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Published => "Published",
            Self::Archived => "Archived",
        }
    }
}

impl ProductStatus {
    /// Decode a status stored as text in `column`.
    pub(crate) fn decode(row: &PgRow, column: &str) -> sqlx::Result<Self> {
        row.try_get::<String, _>(column)?
            .parse()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: column.to_string(),
                source: Box::new(e),
            })
    }
}

impl Display for ProductStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Raised when a string is not one of the known statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown product status \"{0}\"")]
pub struct UnknownStatus(pub String);

impl FromStr for ProductStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| UnknownStatus(value.to_string()))
    }
}

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub status: ProductStatus,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Timestamp,
    pub is_deleted: bool,
}

/// Public projection of a published product.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveProductRecord {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
