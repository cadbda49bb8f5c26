//! App Context

use std::sync::Arc;

use crate::{
    database::{DatabaseSettings, Db},
    domain::{
        products::{PgProductsService, ProductsService},
        schema::{PgSchemaService, SchemaService},
    },
};

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub schema: Arc<dyn SchemaService>,
}

impl AppContext {
    /// Build application context over a lazily connected pool.
    ///
    /// No connection is opened until a service first queries the database.
    #[must_use]
    pub fn new(settings: &DatabaseSettings) -> Self {
        let db = Db::lazy(settings);

        Self {
            products: Arc::new(PgProductsService::new(&db)),
            schema: Arc::new(PgSchemaService::new(db)),
        }
    }
}
