//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::products::{
    data::{NewProduct, ProductDeletion, ProductFilter, ProductUpdate},
    records::{LiveProductRecord, ProductId, ProductRecord, ProductStatus},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");
const LIST_LIVE_PRODUCTS_SQL: &str = include_str!("sql/list_live_products.sql");

#[derive(Debug, Clone)]
/// PostgreSQL-backed products repository.
pub(crate) struct PgProductsRepository {
    pool: PgPool,
}

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .bind(filter.status.map(ProductStatus::as_str))
            .bind(filter.include_deleted)
            .fetch_all(&self.pool)
            .await
    }

    pub(crate) async fn get_product(&self, product: ProductId) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_i64())
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.name)
            .bind(product.description)
            .bind(product.status.as_str())
            .bind(product.created_by)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<ProductRecord, sqlx::Error> {
        let (set_description, description) = match update.description {
            Some(description) => (true, description),
            None => (false, None),
        };

        query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.into_i64())
            .bind(update.name)
            .bind(set_description)
            .bind(description)
            .bind(update.status.map(ProductStatus::as_str))
            .bind(update.updated_by)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        product: ProductId,
        deletion: ProductDeletion,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_i64())
            .bind(deletion.updated_by)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn list_live_products(&self) -> Result<Vec<LiveProductRecord>, sqlx::Error> {
        query_as::<Postgres, LiveProductRecord>(LIST_LIVE_PRODUCTS_SQL)
            .bind(ProductStatus::Published.as_str())
            .fetch_all(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_i64(row.try_get("product_id")?),
            name: row.try_get("product_name")?,
            description: row.try_get("product_desc")?,
            status: ProductStatus::decode(row, "status")?,
            created_by: row.try_get("created_by")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_by: row.try_get("updated_by")?,
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            is_deleted: row.try_get("is_deleted")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for LiveProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_i64(row.try_get("product_id")?),
            name: row.try_get("product_name")?,
            description: row.try_get("product_desc")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
