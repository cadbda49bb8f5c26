//! Schema Repository

use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::{
    products::records::{ProductId, ProductStatus},
    schema::records::ProductSample,
};

const LOCK_BOOTSTRAP_SQL: &str = include_str!("sql/lock_bootstrap.sql");
const CREATE_PRODUCTS_TABLE_SQL: &str = include_str!("sql/create_products_table.sql");
const CREATE_INDEX_SQL: [&str; 3] = [
    include_str!("sql/create_status_index.sql"),
    include_str!("sql/create_created_at_index.sql"),
    include_str!("sql/create_is_deleted_index.sql"),
];
const COUNT_PRODUCTS_SQL: &str = include_str!("sql/count_products.sql");
const SEED_PRODUCTS_SQL: &str = include_str!("sql/seed_products.sql");
const SAMPLE_PRODUCTS_SQL: &str = include_str!("sql/sample_products.sql");

/// Advisory lock key serialising concurrent bootstraps.
const BOOTSTRAP_LOCK_KEY: i64 = 0x0063_6174_616c_6f67;

#[derive(Debug, Clone)]
pub(crate) struct PgSchemaRepository {
    pool: PgPool,
}

impl PgSchemaRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the table and indexes, then seed an empty table.
    ///
    /// Returns `true` when the seed rows were inserted.
    pub(crate) async fn bootstrap(&self) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        query(LOCK_BOOTSTRAP_SQL)
            .bind(BOOTSTRAP_LOCK_KEY)
            .execute(&mut *tx)
            .await?;

        query(CREATE_PRODUCTS_TABLE_SQL).execute(&mut *tx).await?;

        for sql in CREATE_INDEX_SQL {
            query(sql).execute(&mut *tx).await?;
        }

        let count: i64 = query_scalar(COUNT_PRODUCTS_SQL)
            .fetch_one(&mut *tx)
            .await?;

        let seeded = count == 0;

        if seeded {
            query(SEED_PRODUCTS_SQL).execute(&mut *tx).await?;
        }

        tx.commit().await?;

        Ok(seeded)
    }

    pub(crate) async fn sample_products(
        &self,
        limit: u32,
    ) -> Result<Vec<ProductSample>, sqlx::Error> {
        query_as::<Postgres, ProductSample>(SAMPLE_PRODUCTS_SQL)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ProductSample {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_i64(row.try_get("product_id")?),
            name: row.try_get("product_name")?,
            status: ProductStatus::decode(row, "status")?,
        })
    }
}
