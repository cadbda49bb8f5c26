//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};
use serde::Deserialize;

use catalog_app::domain::products::data::NewProduct;

use crate::{
    envelope::ApiError,
    extensions::*,
    products::{errors::into_api_error, responses::ProductEnvelope},
    state::State,
};

/// Create Product Request
///
/// Every field is optional at the wire level so missing values surface as
/// validation errors rather than body parse failures.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CreateProductRequest {
    pub product_name: Option<String>,
    pub product_desc: Option<String>,
    pub status: Option<String>,
    pub created_by: Option<String>,
}

impl TryFrom<CreateProductRequest> for NewProduct {
    type Error = ApiError;

    fn try_from(request: CreateProductRequest) -> Result<Self, Self::Error> {
        Ok(NewProduct::try_new(
            request.product_name,
            request.product_desc,
            request.status.as_deref(),
            request.created_by,
        )?)
    }
}

/// Create Product Handler
///
/// Body: `product_name` and `created_by` are required; `status` defaults to `Draft`.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.create",
    skip(req, depot, res),
    fields(product_id = tracing::field::Empty, status = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let new_product: NewProduct = req
        .parse_json::<CreateProductRequest>()
        .await
        .or_400("Invalid request body")?
        .try_into()?;

    let span = tracing::Span::current();

    span.record("status", tracing::field::display(new_product.status));

    let product = state
        .app
        .products
        .create_product(new_product)
        .await
        .map_err(|error| into_api_error(error, "Failed to create product"))?;

    span.record("product_id", tracing::field::display(product.id));

    res.add_header(LOCATION, format!("/api/products/{}", product.id), true)
        .or_500("Failed to create product")?
        .status_code(StatusCode::CREATED);

    tracing::info!(product_id = %product.id, created_by = %product.created_by, "created product");

    Ok(Json(ProductEnvelope::with_message(
        product,
        "Product created successfully",
    )))
}
