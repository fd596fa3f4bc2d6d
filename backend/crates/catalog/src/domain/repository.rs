//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::product::{Product, ProductDraft};
use crate::domain::value_object::product_id::ProductId;
use crate::error::CatalogResult;

/// Product repository trait
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    /// All products, ordered by id
    async fn list(&self) -> CatalogResult<Vec<Product>>;

    async fn create(&self, draft: ProductDraft) -> CatalogResult<Product>;

    /// Replace every field; `None` if no such product
    async fn update(&self, id: ProductId, draft: ProductDraft) -> CatalogResult<Option<Product>>;

    /// Remove and return the row; `None` if no such product
    async fn delete(&self, id: ProductId) -> CatalogResult<Option<Product>>;
}
