//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use catalog_app::{
    context::AppContext,
    domain::{
        products::{
            MockProductsService,
            records::{LiveProductRecord, ProductId, ProductRecord, ProductStatus},
        },
        schema::MockSchemaService,
    },
};

use crate::state::State;

/// A products mock that fails the test if any method is called.
pub(crate) fn untouched_products() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();
    products.expect_list_live_products().never();

    products
}

/// A schema mock that fails the test if any method is called.
pub(crate) fn untouched_schema() -> MockSchemaService {
    let mut schema = MockSchemaService::new();

    schema.expect_bootstrap().never();
    schema.expect_sample_products().never();

    schema
}

pub(crate) fn state_with(products: MockProductsService, schema: MockSchemaService) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
        schema: Arc::new(schema),
    })
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(products, untouched_schema())))
            .push(route),
    )
}

pub(crate) fn schema_service(schema: MockSchemaService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(untouched_products(), schema)))
            .push(route),
    )
}

pub(crate) fn make_product(id: ProductId) -> ProductRecord {
    ProductRecord {
        id,
        name: "Product A".to_string(),
        description: Some("Description for Product A".to_string()),
        status: ProductStatus::Draft,
        created_by: "admin".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_by: None,
        updated_at: Timestamp::UNIX_EPOCH,
        is_deleted: false,
    }
}

pub(crate) fn make_live_product(id: ProductId) -> LiveProductRecord {
    LiveProductRecord {
        id,
        name: "Product B".to_string(),
        description: Some("Description for Product B".to_string()),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
