//! API Router

use salvo::Router;

use crate::{diagnostics, products};

/// Routes mounted under `/api`.
///
/// `live` is pushed before `{id}` so it is never parsed as a product id.
pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(Router::with_path("live").get(products::live::handler))
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(Router::with_path("test-db").get(diagnostics::handler))
}
