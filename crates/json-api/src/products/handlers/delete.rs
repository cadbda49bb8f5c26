//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use serde::Deserialize;

use catalog_app::domain::products::data::ProductDeletion;

use crate::{
    envelope::{ApiError, MessageEnvelope},
    extensions::*,
    products::errors::into_api_error,
    state::State,
};

/// Delete Product Request
#[derive(Debug, Default, Deserialize)]
pub(crate) struct DeleteProductRequest {
    pub updated_by: Option<String>,
}

/// Delete Product Handler
///
/// Soft-deletes the product. The body must name the deleting identity in
/// `updated_by`; a missing or unreadable body is treated as an absent identity.
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.delete",
    skip(id, req, depot),
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<MessageEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_product_id()?;

    tracing::Span::current().record("product_id", tracing::field::display(id));

    let request = req
        .parse_json::<DeleteProductRequest>()
        .await
        .unwrap_or_default();

    let deletion = ProductDeletion::try_new(request.updated_by)?;
    let deleted_by = deletion.updated_by.clone();

    state
        .app
        .products
        .delete_product(id, deletion)
        .await
        .map_err(|error| into_api_error(error, "Failed to delete product"))?;

    tracing::info!(product_id = %id, %deleted_by, "soft-deleted product");

    Ok(Json(MessageEnvelope::new("Product deleted successfully")))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use catalog_app::domain::products::{MockProductsService, ProductsServiceError, records::ProductId};

    use crate::{
        envelope::ErrorEnvelope,
        test_helpers::{products_service, untouched_products},
    };

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("api/products/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_product_success() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_delete_product()
            .once()
            .withf(|id, deletion| {
                *id == ProductId::from_i64(3)
                    && *deletion
                        == ProductDeletion {
                            updated_by: "admin".to_string(),
                        }
            })
            .return_once(|_, _| Ok(()));

        let mut res = TestClient::delete("http://example.com/api/products/3")
            .json(&json!({ "updated_by": "admin" }))
            .send(&make_service(products))
            .await;

        let body: MessageEnvelope = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.success, "envelope should report success");
        assert_eq!(body.message, "Product deleted successfully");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_without_updater_returns_400() -> TestResult {
        let requests = [
            TestClient::delete("http://example.com/api/products/3").json(&json!({})),
            TestClient::delete("http://example.com/api/products/3").raw_json("{broken"),
            TestClient::delete("http://example.com/api/products/3"),
        ];

        for request in requests {
            let mut res = request.send(&make_service(untouched_products())).await;

            let body: ErrorEnvelope = res.take_json().await?;

            assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
            assert_eq!(body.error, "updated_by is required for deletion");
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_invalid_id_returns_400() -> TestResult {
        let mut res = TestClient::delete("http://example.com/api/products/x1")
            .json(&json!({ "updated_by": "admin" }))
            .send(&make_service(untouched_products()))
            .await;

        let body: ErrorEnvelope = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Invalid product ID");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_product_returns_404() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_delete_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::NotFound));

        let mut res = TestClient::delete("http://example.com/api/products/3")
            .json(&json!({ "updated_by": "admin" }))
            .send(&make_service(products))
            .await;

        let body: ErrorEnvelope = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.error, "Product not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_storage_error_returns_500() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_delete_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::Sql(sqlx::Error::PoolClosed)));

        let mut res = TestClient::delete("http://example.com/api/products/3")
            .json(&json!({ "updated_by": "admin" }))
            .send(&make_service(products))
            .await;

        let body: ErrorEnvelope = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.error, "Failed to delete product");

        Ok(())
    }
}
