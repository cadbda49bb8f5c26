//! Product id path parameter parsing.

use salvo::oapi::extract::PathParam;

use catalog_app::domain::products::records::ProductId;

use crate::{envelope::ApiError, extensions::*};

pub(crate) trait ProductIdExt {
    fn into_product_id(self) -> Result<ProductId, ApiError>;
}

impl ProductIdExt for PathParam<String> {
    fn into_product_id(self) -> Result<ProductId, ApiError> {
        parse_product_id(&self.into_inner())
    }
}

fn parse_product_id(raw: &str) -> Result<ProductId, ApiError> {
    raw.parse::<ProductId>().or_400("Invalid product ID")
}
