//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::products::{
        data::{NewProduct, ProductDeletion, ProductFilter, ProductUpdate},
        errors::ProductsServiceError,
        records::{LiveProductRecord, ProductId, ProductRecord},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: &Db) -> Self {
        Self {
            repository: PgProductsRepository::new(db.pool().clone()),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let products = self.repository.list_products(filter).await?;

        debug!(
            count = products.len(),
            status = ?filter.status,
            include_deleted = filter.include_deleted,
            "listed products"
        );

        Ok(products)
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        Ok(self.repository.get_product(product).await?)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        Ok(self.repository.create_product(product).await?)
    }

    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        Ok(self.repository.update_product(product, update).await?)
    }

    async fn delete_product(
        &self,
        product: ProductId,
        deletion: ProductDeletion,
    ) -> Result<(), ProductsServiceError> {
        let rows_affected = self.repository.delete_product(product, deletion).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        Ok(())
    }

    async fn list_live_products(&self) -> Result<Vec<LiveProductRecord>, ProductsServiceError> {
        Ok(self.repository.list_live_products().await?)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Lists products matching the filter, newest first.
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieves a single product that has not been soft-deleted.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a new product.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Applies the supplied fields to a product that has not been soft-deleted.
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Soft-deletes a product. Deleting twice yields `NotFound`.
    async fn delete_product(
        &self,
        product: ProductId,
        deletion: ProductDeletion,
    ) -> Result<(), ProductsServiceError>;

    /// Lists published, non-deleted products.
    async fn list_live_products(&self) -> Result<Vec<LiveProductRecord>, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::products::records::ProductStatus,
        test::{TestContext, helpers::create_product},
    };

    use super::*;

    #[tokio::test]
    #[ignore = "requires a Docker daemon for testcontainers"]
    async fn test_create_product_returns_stored_row() -> TestResult {
        let ctx = TestContext::new().await;

        let product = create_product(&ctx, "Lamp", ProductStatus::Draft).await?;

        assert_eq!(product.name, "Lamp");
        assert_eq!(product.status, ProductStatus::Draft);
        assert_eq!(product.created_by, "tester");
        assert_eq!(product.updated_by, None);
        assert!(!product.is_deleted);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for testcontainers"]
    async fn test_create_product_assigns_increasing_ids() -> TestResult {
        let ctx = TestContext::new().await;

        let first = create_product(&ctx, "First", ProductStatus::Draft).await?;
        let second = create_product(&ctx, "Second", ProductStatus::Draft).await?;

        assert!(second.id > first.id, "ids must never be reused");

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for testcontainers"]
    async fn test_get_product_returns_created_product() -> TestResult {
        let ctx = TestContext::new().await;

        let created = create_product(&ctx, "Desk", ProductStatus::Published).await?;
        let fetched = ctx.products.get_product(created.id).await?;

        assert_eq!(fetched, created);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for testcontainers"]
    async fn test_get_product_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.get_product(ProductId::from_i64(999_999)).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for testcontainers"]
    async fn test_list_products_excludes_deleted_unless_requested() -> TestResult {
        let ctx = TestContext::new().await;

        let kept = create_product(&ctx, "Kept", ProductStatus::Draft).await?;
        let deleted = create_product(&ctx, "Deleted", ProductStatus::Draft).await?;

        ctx.products
            .delete_product(
                deleted.id,
                ProductDeletion {
                    updated_by: "tester".to_string(),
                },
            )
            .await?;

        let visible: Vec<ProductId> = ctx
            .products
            .list_products(ProductFilter::default())
            .await?
            .iter()
            .map(|p| p.id)
            .collect();

        assert!(visible.contains(&kept.id), "kept product should be listed");
        assert!(
            !visible.contains(&deleted.id),
            "deleted product should be hidden by default"
        );

        let everything: Vec<ProductId> = ctx
            .products
            .list_products(ProductFilter {
                status: None,
                include_deleted: true,
            })
            .await?
            .iter()
            .map(|p| p.id)
            .collect();

        assert!(
            everything.contains(&deleted.id),
            "includeDeleted should list deleted products"
        );

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for testcontainers"]
    async fn test_list_products_filters_by_status_newest_first() -> TestResult {
        let ctx = TestContext::new().await;

        let older = create_product(&ctx, "Older", ProductStatus::Published).await?;
        let draft = create_product(&ctx, "Draft", ProductStatus::Draft).await?;
        let newer = create_product(&ctx, "Newer", ProductStatus::Published).await?;

        let published = ctx
            .products
            .list_products(ProductFilter {
                status: Some(ProductStatus::Published),
                include_deleted: false,
            })
            .await?;

        let ids: Vec<ProductId> = published.iter().map(|p| p.id).collect();

        // The seeded "Product B" is published too, and older than both.
        assert_eq!(ids.get(..2), Some(&[newer.id, older.id][..]));
        assert!(!ids.contains(&draft.id), "draft product should be filtered out");
        assert!(
            published
                .iter()
                .all(|p| p.status == ProductStatus::Published),
            "only published products should be listed"
        );

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for testcontainers"]
    async fn test_update_product_changes_only_supplied_fields() -> TestResult {
        let ctx = TestContext::new().await;

        let created = create_product(&ctx, "Chair", ProductStatus::Draft).await?;

        let updated = ctx
            .products
            .update_product(
                created.id,
                ProductUpdate {
                    name: None,
                    description: None,
                    status: Some(ProductStatus::Published),
                    updated_by: "editor".to_string(),
                },
            )
            .await?;

        assert_eq!(updated.name, "Chair");
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.status, ProductStatus::Published);
        assert_eq!(updated.created_by, "tester");
        assert_eq!(updated.updated_by.as_deref(), Some("editor"));
        assert!(updated.updated_at >= created.updated_at);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for testcontainers"]
    async fn test_update_product_can_clear_description() -> TestResult {
        let ctx = TestContext::new().await;

        let created = create_product(&ctx, "Chair", ProductStatus::Draft).await?;

        let updated = ctx
            .products
            .update_product(
                created.id,
                ProductUpdate {
                    name: Some("Armchair".to_string()),
                    description: Some(None),
                    status: None,
                    updated_by: "editor".to_string(),
                },
            )
            .await?;

        assert_eq!(updated.name, "Armchair");
        assert_eq!(updated.description, None);
        assert_eq!(updated.status, ProductStatus::Draft);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for testcontainers"]
    async fn test_update_deleted_product_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let created = create_product(&ctx, "Chair", ProductStatus::Draft).await?;

        ctx.products
            .delete_product(
                created.id,
                ProductDeletion {
                    updated_by: "tester".to_string(),
                },
            )
            .await?;

        let result = ctx
            .products
            .update_product(
                created.id,
                ProductUpdate {
                    name: Some("Ghost".to_string()),
                    description: None,
                    status: None,
                    updated_by: "editor".to_string(),
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for testcontainers"]
    async fn test_delete_product_twice_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let created = create_product(&ctx, "Table", ProductStatus::Draft).await?;

        let deletion = ProductDeletion {
            updated_by: "tester".to_string(),
        };

        ctx.products
            .delete_product(created.id, deletion.clone())
            .await?;

        let second = ctx.products.delete_product(created.id, deletion).await;

        assert!(
            matches!(second, Err(ProductsServiceError::NotFound)),
            "expected NotFound on second delete, got {second:?}"
        );

        let fetched = ctx.products.get_product(created.id).await;

        assert!(
            matches!(fetched, Err(ProductsServiceError::NotFound)),
            "expected NotFound after deletion, got {fetched:?}"
        );

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for testcontainers"]
    async fn test_live_products_are_published_and_not_deleted() -> TestResult {
        let ctx = TestContext::new().await;

        let live = create_product(&ctx, "Live", ProductStatus::Published).await?;
        let draft = create_product(&ctx, "Draft", ProductStatus::Draft).await?;
        let archived = create_product(&ctx, "Archived", ProductStatus::Archived).await?;
        let removed = create_product(&ctx, "Removed", ProductStatus::Published).await?;

        ctx.products
            .delete_product(
                removed.id,
                ProductDeletion {
                    updated_by: "tester".to_string(),
                },
            )
            .await?;

        let ids: Vec<ProductId> = ctx
            .products
            .list_live_products()
            .await?
            .iter()
            .map(|p| p.id)
            .collect();

        assert!(ids.contains(&live.id), "published product should be live");
        assert!(!ids.contains(&draft.id), "draft product should not be live");
        assert!(
            !ids.contains(&archived.id),
            "archived product should not be live"
        );
        assert!(
            !ids.contains(&removed.id),
            "deleted product should not be live"
        );

        Ok(())
    }
}
