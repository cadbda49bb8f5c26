//! Schema Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use crate::domain::products::records::{ProductId, ProductStatus};

/// What a bootstrap run changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BootstrapOutcome {
    /// The application database did not exist and was created.
    pub database_created: bool,

    /// The table was empty and the sample rows were inserted.
    pub seeded: bool,
}

/// Diagnostic projection of a product row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSample {
    #[serde(rename = "product_id")]
    pub id: ProductId,

    #[serde(rename = "product_name")]
    pub name: String,

    pub status: ProductStatus,
}

impl Display for ProductSample {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}\t{}\t{}", self.id, self.status, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_displays_tab_separated_columns() {
        let sample = ProductSample {
            id: ProductId::from_i64(7),
            name: "Product A".to_string(),
            status: ProductStatus::Draft,
        };

        assert_eq!(sample.to_string(), "7\tDraft\tProduct A");
    }

    #[test]
    fn test_sample_serializes_with_column_names() -> Result<(), serde_json::Error> {
        let sample = ProductSample {
            id: ProductId::from_i64(2),
            name: "Product B".to_string(),
            status: ProductStatus::Published,
        };

        assert_eq!(
            serde_json::to_value(&sample)?,
            serde_json::json!({
                "product_id": 2,
                "product_name": "Product B",
                "status": "Published",
            })
        );

        Ok(())
    }

    #[test]
    fn test_default_outcome_changes_nothing() {
        let outcome = BootstrapOutcome::default();

        assert!(!outcome.database_created);
        assert!(!outcome.seeded);
    }
}
