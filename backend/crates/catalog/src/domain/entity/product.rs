//! Product Entity

use crate::domain::value_object::{price::Price, product_id::ProductId};
use crate::error::{CatalogError, CatalogResult};

/// A row of `products`
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: Price,
    /// Image URL or path; may be empty
    pub image: String,
    pub description: String,
    /// Featured on the storefront
    pub popular: bool,
}

/// Validated field set for create and full-replace update
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: Price,
    pub image: String,
    pub description: String,
    pub popular: bool,
}

impl ProductDraft {
    /// `name` and `category` must be non-blank and `price` present
    pub fn new(
        name: String,
        category: String,
        price: Option<f64>,
        image: String,
        description: String,
        popular: bool,
    ) -> CatalogResult<Self> {
        if name.trim().is_empty() {
            return Err(CatalogError::InvalidRequest("Name is required".to_string()));
        }
        if category.trim().is_empty() {
            return Err(CatalogError::InvalidRequest(
                "Category is required".to_string(),
            ));
        }
        let price = price
            .ok_or_else(|| CatalogError::InvalidRequest("Price is required".to_string()))
            .and_then(Price::new)?;

        Ok(Self {
            name,
            category,
            price,
            image,
            description,
            popular,
        })
    }

    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
            image: self.image,
            description: self.description,
            popular: self.popular,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, category: &str, price: Option<f64>) -> CatalogResult<ProductDraft> {
        ProductDraft::new(
            name.to_string(),
            category.to_string(),
            price,
            String::new(),
            String::new(),
            false,
        )
    }

    #[test]
    fn test_valid_draft_allows_empty_image_and_description() {
        let d = draft("Borscht", "soups", Some(350.0)).unwrap();
        assert_eq!(d.price.get(), 350.0);
        assert!(d.image.is_empty());
        assert!(!d.popular);
    }

    #[test]
    fn test_draft_presence_rules() {
        assert!(draft("", "soups", Some(1.0)).is_err());
        assert!(draft("Borscht", "  ", Some(1.0)).is_err());
        assert!(draft("Borscht", "soups", None).is_err());
        assert!(draft("Borscht", "soups", Some(-1.0)).is_err());
    }

    #[test]
    fn test_into_product_keeps_fields() {
        let product = draft("Borscht", "soups", Some(350.0))
            .unwrap()
            .into_product(ProductId::new(3));
        assert_eq!(product.id.get(), 3);
        assert_eq!(product.name, "Borscht");
    }
}
