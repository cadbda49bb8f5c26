//! Product Errors

use tracing::error;

use catalog_app::domain::products::{ProductsServiceError, data::ProductValidationError};

use crate::envelope::ApiError;

/// Map a service failure to an envelope error; `failure` is the route's 500 message.
pub(crate) fn into_api_error(error: ProductsServiceError, failure: &str) -> ApiError {
    match error {
        ProductsServiceError::NotFound => ApiError::not_found("Product not found"),
        ProductsServiceError::Validation(source) => source.into(),
        ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData => {
            ApiError::bad_request("Invalid product data")
        }
        ProductsServiceError::Sql(source) => {
            error!("{failure}: {source}");

            ApiError::internal(failure)
        }
    }
}

impl From<ProductValidationError> for ApiError {
    fn from(error: ProductValidationError) -> Self {
        ApiError::bad_request(error.to_string())
    }
}
