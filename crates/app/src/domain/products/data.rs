//! Products Data
//!
//! Typed inputs for the products service. Constructors take the raw, optional
//! request fields and enforce the column rules before any statement runs.

use thiserror::Error;

use crate::domain::products::records::ProductStatus;

/// Longest accepted `product_name`, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Longest accepted `created_by` / `updated_by`, in characters.
pub const MAX_IDENTITY_LENGTH: usize = 50;

/// Input rejected before reaching the database.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductValidationError {
    #[error("Product name and created_by are required")]
    MissingNameOrCreator,

    #[error("updated_by is required")]
    MissingUpdater,

    #[error("updated_by is required for deletion")]
    MissingDeleter,

    #[error("product_name cannot be empty")]
    EmptyName,

    #[error("product_name must be at most 100 characters")]
    NameTooLong,

    #[error("{0} must be at most 50 characters")]
    IdentityTooLong(&'static str),

    #[error("Status must be one of: Draft, Published, Archived")]
    InvalidStatus(String),
}

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub status: ProductStatus,
    pub created_by: String,
}

impl NewProduct {
    /// Validate raw create input. A missing or blank status means `Draft`.
    ///
    /// # Errors
    ///
    /// Returns an error when the name or creator is missing, the status is unknown,
    /// or a field exceeds its column length.
    pub fn try_new(
        name: Option<String>,
        description: Option<String>,
        status: Option<&str>,
        created_by: Option<String>,
    ) -> Result<Self, ProductValidationError> {
        let (Some(name), Some(created_by)) = (non_blank(name), non_blank(created_by)) else {
            return Err(ProductValidationError::MissingNameOrCreator);
        };

        let status = parse_status(status)?.unwrap_or_default();

        check_name(&name)?;
        check_identity("created_by", &created_by)?;

        Ok(Self {
            name,
            description,
            status,
            created_by,
        })
    }
}

/// Product Update Data
///
/// `None` leaves a column untouched. `description: Some(None)` clears it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<ProductStatus>,
    pub updated_by: String,
}

impl ProductUpdate {
    /// Validate raw update input.
    ///
    /// # Errors
    ///
    /// Returns an error when the updater is missing, the status is unknown, or a
    /// supplied name is blank or too long.
    pub fn try_new(
        name: Option<String>,
        description: Option<Option<String>>,
        status: Option<&str>,
        updated_by: Option<String>,
    ) -> Result<Self, ProductValidationError> {
        let Some(updated_by) = non_blank(updated_by) else {
            return Err(ProductValidationError::MissingUpdater);
        };

        let status = parse_status(status)?;

        let name = match name {
            Some(name) => {
                let name = non_blank(Some(name)).ok_or(ProductValidationError::EmptyName)?;

                check_name(&name)?;

                Some(name)
            }
            None => None,
        };

        check_identity("updated_by", &updated_by)?;

        Ok(Self {
            name,
            description,
            status,
            updated_by,
        })
    }
}

/// Soft-delete Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDeletion {
    pub updated_by: String,
}

impl ProductDeletion {
    /// # Errors
    ///
    /// Returns an error when the deleting identity is missing or too long.
    pub fn try_new(updated_by: Option<String>) -> Result<Self, ProductValidationError> {
        let updated_by = non_blank(updated_by).ok_or(ProductValidationError::MissingDeleter)?;

        check_identity("updated_by", &updated_by)?;

        Ok(Self { updated_by })
    }
}

/// Listing filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub status: Option<ProductStatus>,
    pub include_deleted: bool,
}

impl ProductFilter {
    /// Build a filter from raw query values.
    ///
    /// Unknown statuses apply no status filter; deleted rows are only included
    /// when `include_deleted` is exactly `"true"`.
    #[must_use]
    pub fn from_query(status: Option<&str>, include_deleted: Option<&str>) -> Self {
        Self {
            status: status.and_then(|value| value.parse().ok()),
            include_deleted: include_deleted == Some("true"),
        }
    }
}

/// Whitespace-only values count as missing; anything else is kept as supplied.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn parse_status(status: Option<&str>) -> Result<Option<ProductStatus>, ProductValidationError> {
    match status.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_unknown| ProductValidationError::InvalidStatus(value.to_string())),
    }
}

fn check_name(name: &str) -> Result<(), ProductValidationError> {
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ProductValidationError::NameTooLong);
    }

    Ok(())
}

fn check_identity(field: &'static str, value: &str) -> Result<(), ProductValidationError> {
    if value.chars().count() > MAX_IDENTITY_LENGTH {
        return Err(ProductValidationError::IdentityTooLong(field));
    }

    Ok(())
}
