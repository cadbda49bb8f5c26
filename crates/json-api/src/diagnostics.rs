//! Database Diagnostics Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use catalog_app::domain::schema::records::ProductSample;

use crate::{envelope::ApiError, extensions::*, state::State};

/// Rows returned in `sampleData`.
const SAMPLE_SIZE: u32 = 2;

/// Sampled product row
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductSampleResponse {
    /// Product identifier
    pub product_id: i64,

    /// Product name
    pub product_name: String,

    /// Lifecycle status
    pub status: String,
}

impl From<ProductSample> for ProductSampleResponse {
    fn from(sample: ProductSample) -> Self {
        ProductSampleResponse {
            product_id: sample.id.into_i64(),
            product_name: sample.name,
            status: sample.status.to_string(),
        }
    }
}

/// Database diagnostics response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DiagnosticsResponse {
    /// Always `true`
    pub success: bool,

    /// Outcome description
    pub message: String,

    /// First products by id
    #[serde(rename = "sampleData")]
    pub sample_data: Vec<ProductSampleResponse>,
}

/// Database Diagnostics Handler
///
/// Bootstraps the schema, then reads a couple of rows back.
#[endpoint(
    tags("diagnostics"),
    summary = "Test database connection",
    responses(
        (status_code = StatusCode::OK, description = "Database reachable"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Database unavailable"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<DiagnosticsResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .schema
        .bootstrap()
        .await
        .or_500("Database initialization failed")?;

    let samples = state
        .app
        .schema
        .sample_products(SAMPLE_SIZE)
        .await
        .or_500("Database connection failed")?;

    Ok(Json(DiagnosticsResponse {
        success: true,
        message: "Database connection successful".to_string(),
        sample_data: samples.into_iter().map(Into::into).collect(),
    }))
}
