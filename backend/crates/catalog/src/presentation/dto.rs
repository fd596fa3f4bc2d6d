//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::product::{Product, ProductDraft};
use crate::error::CatalogResult;

/// Create/update body. Every field is optional on the wire; presence rules
/// are applied when converting into a `ProductDraft`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductRequest {
    pub name: String,
    pub category: String,
    pub price: Option<f64>,
    pub image: String,
    pub description: String,
    pub popular: bool,
}

impl ProductRequest {
    pub fn into_draft(self) -> CatalogResult<ProductDraft> {
        ProductDraft::new(
            self.name,
            self.category,
            self.price,
            self.image,
            self.description,
            self.popular,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub image: String,
    pub description: String,
    pub popular: bool,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.get(),
            name: product.name,
            category: product.category,
            price: product.price.get(),
            image: product.image,
            description: product.description,
            popular: product.popular,
        }
    }
}

/// `{message, product}` envelope for admin mutations
#[derive(Debug, Clone, Serialize)]
pub struct ProductMutationResponse {
    pub message: &'static str,
    pub product: ProductResponse,
}
