//! Product response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::records::{LiveProductRecord, ProductRecord};

/// Product
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// Product identifier
    pub product_id: i64,

    /// Product name
    pub product_name: String,

    /// Optional description
    pub product_desc: Option<String>,

    /// One of `Draft`, `Published`, `Archived`
    pub status: String,

    /// Identity that created the product
    pub created_by: String,

    /// Creation time (RFC 3339)
    pub created_at: String,

    /// Identity that last changed the product
    pub updated_by: Option<String>,

    /// Last change time (RFC 3339)
    pub updated_at: String,

    /// Whether the product has been soft-deleted
    pub is_deleted: bool,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            product_id: product.id.into_i64(),
            product_name: product.name,
            product_desc: product.description,
            status: product.status.to_string(),
            created_by: product.created_by,
            created_at: product.created_at.to_string(),
            updated_by: product.updated_by,
            updated_at: product.updated_at.to_string(),
            is_deleted: product.is_deleted,
        }
    }
}

/// Published product, as shown publicly
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LiveProductResponse {
    /// Product identifier
    pub product_id: i64,

    /// Product name
    pub product_name: String,

    /// Optional description
    pub product_desc: Option<String>,

    /// Creation time (RFC 3339)
    pub created_at: String,

    /// Last change time (RFC 3339)
    pub updated_at: String,
}

impl From<LiveProductRecord> for LiveProductResponse {
    fn from(product: LiveProductRecord) -> Self {
        LiveProductResponse {
            product_id: product.id.into_i64(),
            product_name: product.name,
            product_desc: product.description,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Envelope around a single product
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductEnvelope {
    /// Always `true`
    pub success: bool,

    /// The product
    pub data: ProductResponse,

    /// Outcome description, on mutations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ProductEnvelope {
    pub(crate) fn new(product: ProductRecord) -> Self {
        Self {
            success: true,
            data: product.into(),
            message: None,
        }
    }

    pub(crate) fn with_message(product: ProductRecord, message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
            ..Self::new(product)
        }
    }
}

/// Envelope around a product list
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsEnvelope {
    /// Always `true`
    pub success: bool,

    /// Matching products, newest first
    pub data: Vec<ProductResponse>,
}

/// Envelope around the public product list
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LiveProductsEnvelope {
    /// Always `true`
    pub success: bool,

    /// Published products, newest first
    pub data: Vec<LiveProductResponse>,

    /// Outcome description
    pub message: String,
}
