//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use catalog_app::domain::products::data::ProductFilter;

use crate::{
    envelope::ApiError,
    extensions::*,
    products::{errors::into_api_error, responses::ProductsEnvelope},
    state::State,
};

/// Product Index Handler
///
/// Lists products newest first. `status` filters by an exact status (unknown
/// values are ignored) and `includeDeleted=true` also returns soft-deleted rows.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Products listed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductsEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let status = req.query::<String>("status");
    let include_deleted = req.query::<String>("includeDeleted");

    let filter = ProductFilter::from_query(status.as_deref(), include_deleted.as_deref());

    let products = state
        .app
        .products
        .list_products(filter)
        .await
        .map_err(|error| into_api_error(error, "Failed to fetch products"))?;

    Ok(Json(ProductsEnvelope {
        success: true,
        data: products.into_iter().map(Into::into).collect(),
    }))
}
