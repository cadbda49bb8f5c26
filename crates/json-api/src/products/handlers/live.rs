//! Live Products Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    envelope::ApiError,
    extensions::*,
    products::{errors::into_api_error, responses::LiveProductsEnvelope},
    state::State,
};

/// Live Products Handler
///
/// Public listing of published, non-deleted products, newest first.
#[endpoint(
    tags("products"),
    summary = "List Live Products",
    responses(
        (status_code = StatusCode::OK, description = "Live products listed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<LiveProductsEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_live_products()
        .await
        .map_err(|error| into_api_error(error, "Failed to fetch live products"))?;

    Ok(Json(LiveProductsEnvelope {
        success: true,
        data: products.into_iter().map(Into::into).collect(),
        message: "Live products fetched successfully".to_string(),
    }))
}
