//! Test Helpers

use crate::{
    domain::products::{
        ProductsService, ProductsServiceError,
        data::NewProduct,
        records::{ProductRecord, ProductStatus},
    },
    test::TestContext,
};

pub(crate) async fn create_product(
    ctx: &TestContext,
    name: &str,
    status: ProductStatus,
) -> Result<ProductRecord, ProductsServiceError> {
    ctx.products
        .create_product(NewProduct {
            name: name.to_string(),
            description: Some(format!("{name} description")),
            status,
            created_by: "tester".to_string(),
        })
        .await
}
