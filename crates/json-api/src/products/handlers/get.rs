//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    envelope::ApiError,
    extensions::*,
    products::{errors::into_api_error, responses::ProductEnvelope},
    state::State,
};

/// Get Product Handler
///
/// Returns a product that has not been deleted.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid product ID"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_product_id()?;

    let product = state
        .app
        .products
        .get_product(id)
        .await
        .map_err(|error| into_api_error(error, "Failed to fetch product"))?;

    Ok(Json(ProductEnvelope::new(product)))
}
