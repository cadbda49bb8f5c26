//! Schema
//!
//! Creates the `products` table on demand and seeds it the first time it is empty.

pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::SchemaServiceError;
pub use service::*;
