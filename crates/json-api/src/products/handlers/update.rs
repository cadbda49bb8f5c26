//! Update Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use serde::{Deserialize, Deserializer};

use catalog_app::domain::products::data::ProductUpdate;

use crate::{
    envelope::ApiError,
    extensions::*,
    products::{errors::into_api_error, responses::ProductEnvelope},
    state::State,
};

/// Update Product Request
#[derive(Debug, Default, Deserialize)]
pub(crate) struct UpdateProductRequest {
    pub product_name: Option<String>,

    /// Absent keeps the description, `null` clears it.
    #[serde(default, deserialize_with = "present")]
    pub product_desc: Option<Option<String>>,

    pub status: Option<String>,
    pub updated_by: Option<String>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl TryFrom<UpdateProductRequest> for ProductUpdate {
    type Error = ApiError;

    fn try_from(request: UpdateProductRequest) -> Result<Self, Self::Error> {
        Ok(ProductUpdate::try_new(
            request.product_name,
            request.product_desc,
            request.status.as_deref(),
            request.updated_by,
        )?)
    }
}

/// Update Product Handler
///
/// Only supplied fields change. `updated_by` is always required.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(id, req, depot),
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_product_id()?;

    tracing::Span::current().record("product_id", tracing::field::display(id));

    let update: ProductUpdate = req
        .parse_json::<UpdateProductRequest>()
        .await
        .or_400("Invalid request body")?
        .try_into()?;

    let product = state
        .app
        .products
        .update_product(id, update)
        .await
        .map_err(|error| into_api_error(error, "Failed to update product"))?;

    Ok(Json(ProductEnvelope::with_message(
        product,
        "Product updated successfully",
    )))
}
